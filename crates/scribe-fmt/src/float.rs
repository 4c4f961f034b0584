//! Shortest round-trip float formatting.
//!
//! Digit generation is delegated to [`ryu`]; this module only adapts it to
//! the write-into-slice convention used by [`crate::int`]. The text is the
//! shortest decimal that parses back to the same bit pattern, switching to
//! exponent notation for very large and very small magnitudes (`1e300`,
//! `2.2250738585072014e-308`). Non-finite values become `NaN`, `inf` and
//! `-inf`.

/// Longest text [`dtoa`], [`ftoa`] or [`ftoa_short`] can produce
/// (`-2.2250738585072014e-308`).
pub const FLOAT_LEN: usize = 24;

/// Write the shortest round-trip text of `v` into `buf`, returning the length.
///
/// # Panics
///
/// Panics if `buf` is shorter than the text (at most [`FLOAT_LEN`]).
#[inline]
pub fn dtoa(v: f64, buf: &mut [u8]) -> usize {
    let mut scratch = ryu::Buffer::new();
    copy_out(scratch.format(v), buf)
}

/// Write `v` promoted to `f64` into `buf`, returning the length.
///
/// The promotion is exact, so the text is the shortest one for the widened
/// value: `0.1f32` prints as `0.10000000149011612`.
///
/// # Panics
///
/// Panics if `buf` is shorter than the text (at most [`FLOAT_LEN`]).
#[inline]
pub fn ftoa(v: f32, buf: &mut [u8]) -> usize {
    dtoa(f64::from(v), buf)
}

/// Write the shortest text that round-trips as an `f32`, returning the
/// length. `0.1f32` prints as `0.1`.
///
/// # Panics
///
/// Panics if `buf` is shorter than the text (at most [`FLOAT_LEN`]).
#[inline]
pub fn ftoa_short(v: f32, buf: &mut [u8]) -> usize {
    let mut scratch = ryu::Buffer::new();
    copy_out(scratch.format(v), buf)
}

#[inline]
fn copy_out(text: &str, buf: &mut [u8]) -> usize {
    let len = text.len();
    buf[..len].copy_from_slice(text.as_bytes());
    len
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point types with a shortest round-trip fast path.
///
/// This trait is sealed; it is implemented for `f32` and `f64`.
pub trait Float: sealed::Sealed + Copy {
    /// Longest text this type can produce.
    const MAX_LEN: usize = FLOAT_LEN;

    /// Write `self` into `buf`, returning the length.
    fn write_shortest(self, buf: &mut [u8]) -> usize;
}

impl Float for f32 {
    #[inline]
    fn write_shortest(self, buf: &mut [u8]) -> usize {
        ftoa(self, buf)
    }
}

impl Float for f64 {
    #[inline]
    fn write_shortest(self, buf: &mut [u8]) -> usize {
        dtoa(self, buf)
    }
}
