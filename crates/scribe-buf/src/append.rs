//! Typed append protocol.
//!
//! [`Append`] maps each supported value type to its text form. Fixed-width
//! types reserve a worst-case byte count, format straight into the spare
//! region of the [`TextBuf`], and commit only what was written:
//!
//! | Type | Text | Reserved |
//! |------|------|----------|
//! | `bool` | `true` / `false` | 5 |
//! | `char` | UTF-8 | 4 |
//! | `i8` `u8` `i16` `u16` | decimal | 8 |
//! | `i32` `u32` | decimal | 12 |
//! | `i64` `u64` `isize` `usize` | decimal | 24 |
//! | `*const T` `*mut T` | `0x` address | 20 |
//! | `f32` `f64` | shortest round-trip `f64` (`f32` promoted) | 24 |
//! | [`ShortF32`] | shortest round-trip `f32` | 24 |
//! | [`Hex`] | `0x` hex | 10 / 18 |
//! | [`Byte`] | the byte itself | 1 |
//! | `&str` `&String` `&[u8]` `&[u8; N]` `&CStr` `&TextBuf` | bytes as-is | length |
//!
//! `u8` and `i8` are numbers here. Use [`Byte`] or [`TextBuf::push`] for a
//! raw byte.

use std::ffi::CStr;

use scribe_fmt::{Float, HexInteger, Integer, FLOAT_LEN};

use crate::buf::TextBuf;

/// A value with a text form that can be appended to a [`TextBuf`].
pub trait Append {
    /// Append the text form of `self` to `buf`.
    fn append_to(self, buf: &mut TextBuf);
}

impl Append for bool {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_bytes(if self { b"true" } else { b"false" });
    }
}

impl Append for char {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_with(4, |spare| self.encode_utf8(spare).len());
    }
}

macro_rules! impl_append_integer {
    ($($t:ty => $reserve:expr),* $(,)?) => {
        $(
            impl Append for $t {
                #[inline]
                fn append_to(self, buf: &mut TextBuf) {
                    const _: () = assert!(<$t as Integer>::MAX_LEN <= $reserve);
                    buf.append_with($reserve, |spare| self.write_dec(spare));
                }
            }
        )*
    };
}

impl_append_integer! {
    i8 => 8,
    u8 => 8,
    i16 => 8,
    u16 => 8,
    i32 => 12,
    u32 => 12,
    i64 => 24,
    u64 => 24,
    isize => 24,
    usize => 24,
}

impl<T: ?Sized> Append for *const T {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        let addr = self.cast::<u8>() as usize as u64;
        buf.append_with(20, |spare| scribe_fmt::u64toh(addr, spare));
    }
}

impl<T: ?Sized> Append for *mut T {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        (self as *const T).append_to(buf);
    }
}

/// Promoted to `f64`: `0.1f32` appends `0.10000000149011612`.
impl Append for f32 {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_with(<f32 as Float>::MAX_LEN, |spare| self.write_shortest(spare));
    }
}

impl Append for f64 {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_with(<f64 as Float>::MAX_LEN, |spare| self.write_shortest(spare));
    }
}

impl Append for &str {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_bytes(self.as_bytes());
    }
}

impl Append for &String {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_bytes(self.as_bytes());
    }
}

impl Append for &[u8] {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_bytes(self);
    }
}

impl<const N: usize> Append for &[u8; N] {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_bytes(self);
    }
}

/// Appends the bytes before the terminator.
impl Append for &CStr {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_bytes(self.to_bytes());
    }
}

impl Append for &TextBuf {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_bytes(self.as_bytes());
    }
}

/// A single raw byte, appended as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Byte(pub u8);

impl Append for Byte {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.push(self.0);
    }
}

/// An `f32` appended with the shortest text that round-trips as `f32`
/// (`0.1f32` → `0.1`) instead of being promoted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShortF32(pub f32);

impl Append for ShortF32 {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_with(FLOAT_LEN, |spare| scribe_fmt::ftoa_short(self.0, spare));
    }
}

/// An unsigned integer appended as `0x` plus lowercase hex (`255` → `0xff`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hex<T>(pub T);

impl<T: HexInteger> Append for Hex<T> {
    #[inline]
    fn append_to(self, buf: &mut TextBuf) {
        buf.append_with(T::MAX_HEX_LEN, |spare| self.0.write_hex(spare));
    }
}

/// Append every argument to a [`TextBuf`] in order, without separators.
///
/// ```
/// use scribe_buf::{append, TextBuf};
///
/// let mut buf = TextBuf::new();
/// append!(buf, "x=", 3u8, ' ', 1.5f64);
/// assert_eq!(buf, "x=3 1.5");
/// ```
#[macro_export]
macro_rules! append {
    ($buf:expr $(, $value:expr)* $(,)?) => {{
        #[allow(unused_variables)]
        let buf: &mut $crate::TextBuf = &mut $buf;
        $( buf.append($value); )*
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_concatenates_without_separators() {
        let mut buf = TextBuf::new();
        buf.append(true).append('-').append(42u32).append("end");
        assert_eq!(buf, "true-42end");
        assert_eq!(buf.len(), 10);
    }

    #[test]
    fn booleans() {
        let mut buf = TextBuf::new();
        buf.append(false).append(true);
        assert_eq!(buf, "falsetrue");
    }

    #[test]
    fn small_integers_are_decimal() {
        let mut buf = TextBuf::new();
        buf.append(-128i8).append(' ').append(255u8).append(' ');
        buf.append(i16::MIN).append(' ').append(u16::MAX);
        assert_eq!(buf, "-128 255 -32768 65535");
    }

    #[test]
    fn wide_integers() {
        let mut buf = TextBuf::new();
        buf.append(i64::MIN).append(',').append(u64::MAX).append(',').append(0usize);
        assert_eq!(buf, "-9223372036854775808,18446744073709551615,0");
    }

    #[test]
    fn integer_append_reserves_worst_case() {
        let mut buf = TextBuf::new();
        buf.append(7u64);
        assert_eq!(buf, "7");
        assert_eq!(buf.capacity(), 24);
    }

    #[test]
    fn chars_are_utf8() {
        let mut buf = TextBuf::new();
        buf.append('a').append('é').append('→');
        assert_eq!(buf, "aé→");
        assert_eq!(buf.len(), 1 + 2 + 3);
    }

    #[test]
    fn pointers_are_hex_addresses() {
        let value = 5u32;
        let ptr: *const u32 = &value;
        let mut buf = TextBuf::new();
        buf.append(ptr);
        assert_eq!(buf.as_str().unwrap(), format!("{:#x}", ptr as usize));

        buf.clear();
        buf.append(std::ptr::null::<u8>());
        assert_eq!(buf, "0x0");

        buf.clear();
        let slice: &[u8] = b"abc";
        buf.append(slice as *const [u8]);
        assert_eq!(buf.as_str().unwrap(), format!("{:#x}", slice.as_ptr() as usize));
    }

    #[test]
    fn floats() {
        let mut buf = TextBuf::new();
        buf.append(1.5f64).append(' ').append(-0.0f64).append(' ').append(1e300f64);
        buf.append(' ').append(f64::NAN).append(' ').append(2.5f32);
        assert_eq!(buf, "1.5 -0.0 1e300 NaN 2.5");
    }

    #[test]
    fn f32_appends_as_promoted_double() {
        let mut promoted = TextBuf::new();
        promoted.append(0.1f32 as f64);
        let mut buf = TextBuf::new();
        buf.append(0.1f32);
        assert_eq!(buf, "0.10000000149011612");
        assert_eq!(buf, promoted);
    }

    #[test]
    fn short_f32_wrapper_keeps_f32_shortest() {
        let mut buf = TextBuf::new();
        buf.append(ShortF32(0.1)).append(' ').append(ShortF32(f32::NAN));
        assert_eq!(buf, "0.1 NaN");
    }

    #[test]
    fn text_and_byte_spans() {
        let owned = String::from("owned");
        let c = CStr::from_bytes_with_nul(b"c-str\0").unwrap();
        let other = TextBuf::from("buf");
        let mut buf = TextBuf::new();
        buf.append("str")
            .append(&owned)
            .append(&b"arr"[..])
            .append(b"[N]")
            .append(c)
            .append(&other)
            .append(Byte(b'!'));
        assert_eq!(buf, "strownedarr[N]c-strbuf!");
    }

    #[test]
    fn hex_wrapper() {
        let mut buf = TextBuf::new();
        buf.append(Hex(255u32)).append(' ').append(Hex(0u64)).append(' ').append(Hex(usize::MAX));
        assert_eq!(buf.as_str().unwrap(), format!("0xff 0x0 {:#x}", usize::MAX));
    }

    #[test]
    fn append_macro_chains() {
        let mut buf = TextBuf::new();
        crate::append!(buf, 1u8, '+', 2i64, "=", 3.0f64);
        assert_eq!(buf, "1+2=3.0");
        crate::append!(buf);
        assert_eq!(buf.len(), 7);
    }
}
