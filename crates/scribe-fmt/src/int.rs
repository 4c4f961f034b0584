//! Integer to decimal and hexadecimal ASCII conversion.
//!
//! Every routine writes into a caller-supplied byte slice and returns the
//! number of bytes written. The output is exactly as long as the text, so
//! callers size the destination with the `*_LEN` constants below (or
//! [`Integer::MAX_LEN`]) and never need to clear it first.
//!
//! Decimal conversion counts the digits up front and then fills the
//! output from the least significant end, two digits per division, out of
//! [`DIGIT_PAIRS`]. Nothing is written in reverse and swapped afterwards.
//!
//! A destination shorter than the produced text is a caller bug. It
//! triggers the ordinary slice bound panic before any byte is written.

/// Longest decimal text of a `u32` (`4294967295`).
pub const U32_DEC_LEN: usize = 10;

/// Longest decimal text of an `i32` (`-2147483648`).
pub const I32_DEC_LEN: usize = 11;

/// Longest decimal text of a `u64` (`18446744073709551615`).
pub const U64_DEC_LEN: usize = 20;

/// Longest decimal text of an `i64` (`-9223372036854775808`).
pub const I64_DEC_LEN: usize = 20;

/// Longest `0x`-prefixed hex text of a `u32`.
pub const U32_HEX_LEN: usize = 10;

/// Longest `0x`-prefixed hex text of a `u64`.
pub const U64_HEX_LEN: usize = 18;

/// ASCII for every value in `0..100`, two bytes each, zero padded.
pub const DIGIT_PAIRS: &[u8; 200] = b"\
    0001020304050607080910111213141516171819\
    2021222324252627282930313233343536373839\
    4041424344454647484950515253545556575859\
    6061626364656667686970717273747576777879\
    8081828384858687888990919293949596979899";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Number of decimal digits in `v` (1 for zero).
#[inline]
pub fn digits_u32(v: u32) -> usize {
    if v < 10 {
        1
    } else if v < 100 {
        2
    } else if v < 1_000 {
        3
    } else if v < 10_000 {
        4
    } else if v < 100_000 {
        5
    } else if v < 1_000_000 {
        6
    } else if v < 10_000_000 {
        7
    } else if v < 100_000_000 {
        8
    } else if v < 1_000_000_000 {
        9
    } else {
        10
    }
}

/// Number of decimal digits in `v` (1 for zero).
#[inline]
pub fn digits_u64(v: u64) -> usize {
    if v <= u64::from(u32::MAX) {
        return digits_u32(v as u32);
    }
    // v >= 2^32 > 10^9, so at least 10 digits.
    let mut n = 10;
    let mut bound = 10_000_000_000u64;
    while n < U64_DEC_LEN && v >= bound {
        n += 1;
        bound = bound.wrapping_mul(10);
    }
    n
}

/// Fill `out` (exactly the digit count of `v`) with the decimal digits of `v`.
#[inline]
fn fill_dec_u32(mut v: u32, out: &mut [u8]) {
    let mut end = out.len();
    while v >= 100 {
        let pair = (v % 100) as usize * 2;
        v /= 100;
        end -= 2;
        out[end..end + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    }
    if v >= 10 {
        let pair = v as usize * 2;
        out[end - 2..end].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    } else {
        out[end - 1] = b'0' + v as u8;
    }
}

/// Write the decimal digits of `v` into `buf`, returning the length.
///
/// # Panics
///
/// Panics if `buf` is shorter than the digit count (at most
/// [`U32_DEC_LEN`]).
#[inline]
pub fn u32toa(v: u32, buf: &mut [u8]) -> usize {
    let len = digits_u32(v);
    fill_dec_u32(v, &mut buf[..len]);
    len
}

/// Write the decimal digits of `v` into `buf`, returning the length.
///
/// # Panics
///
/// Panics if `buf` is shorter than the digit count (at most
/// [`U64_DEC_LEN`]).
#[inline]
pub fn u64toa(v: u64, buf: &mut [u8]) -> usize {
    if v <= u64::from(u32::MAX) {
        return u32toa(v as u32, buf);
    }
    let len = digits_u64(v);
    let out = &mut buf[..len];

    // Peel off the low eight digits per round so the tail runs on u32.
    let mut end = len;
    let mut v = v;
    while v > u64::from(u32::MAX) {
        let low = (v % 100_000_000) as u32;
        v /= 100_000_000;
        fill_dec_u32_padded(low, &mut out[end - 8..end]);
        end -= 8;
    }
    fill_dec_u32(v as u32, &mut out[..end]);
    len
}

/// Fill exactly eight bytes with `v` (< 10^8), keeping leading zeros.
#[inline]
fn fill_dec_u32_padded(mut v: u32, out: &mut [u8]) {
    debug_assert!(v < 100_000_000 && out.len() == 8);
    let mut end = 8;
    while end > 0 {
        let pair = (v % 100) as usize * 2;
        v /= 100;
        end -= 2;
        out[end..end + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    }
}

/// Write `v` in decimal with a leading `-` when negative.
///
/// # Panics
///
/// Panics if `buf` is shorter than the text (at most [`I32_DEC_LEN`]).
#[inline]
pub fn i32toa(v: i32, buf: &mut [u8]) -> usize {
    if v >= 0 {
        return u32toa(v as u32, buf);
    }
    buf[0] = b'-';
    u32toa(v.unsigned_abs(), &mut buf[1..]) + 1
}

/// Write `v` in decimal with a leading `-` when negative.
///
/// `i64::MIN` is handled through `unsigned_abs`, so no negation overflows.
///
/// # Panics
///
/// Panics if `buf` is shorter than the text (at most [`I64_DEC_LEN`]).
#[inline]
pub fn i64toa(v: i64, buf: &mut [u8]) -> usize {
    if v >= 0 {
        return u64toa(v as u64, buf);
    }
    buf[0] = b'-';
    u64toa(v.unsigned_abs(), &mut buf[1..]) + 1
}

#[inline]
fn fill_hex(mut v: u64, out: &mut [u8]) {
    out[0] = b'0';
    out[1] = b'x';
    for b in out[2..].iter_mut().rev() {
        *b = HEX_DIGITS[(v & 0xf) as usize];
        v >>= 4;
    }
}

/// Write `v` as `0x` followed by lowercase hex digits (`255` → `0xff`).
///
/// # Panics
///
/// Panics if `buf` is shorter than the text (at most [`U32_HEX_LEN`]).
#[inline]
pub fn u32toh(v: u32, buf: &mut [u8]) -> usize {
    let digits = ((u32::BITS - v.leading_zeros()).max(1) as usize).div_ceil(4);
    let len = digits + 2;
    fill_hex(u64::from(v), &mut buf[..len]);
    len
}

/// Write `v` as `0x` followed by lowercase hex digits (`0` → `0x0`).
///
/// # Panics
///
/// Panics if `buf` is shorter than the text (at most [`U64_HEX_LEN`]).
#[inline]
pub fn u64toh(v: u64, buf: &mut [u8]) -> usize {
    let digits = ((u64::BITS - v.leading_zeros()).max(1) as usize).div_ceil(4);
    let len = digits + 2;
    fill_hex(v, &mut buf[..len]);
    len
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for isize {}
    impl Sealed for usize {}
}

/// Primitive integers with a decimal fast path.
///
/// This trait is sealed; it is implemented for every built-in integer type
/// up to 64 bits.
pub trait Integer: sealed::Sealed + Copy {
    /// Longest decimal text this type can produce, sign included.
    const MAX_LEN: usize;

    /// Write `self` in decimal into `buf`, returning the length.
    fn write_dec(self, buf: &mut [u8]) -> usize;
}

macro_rules! impl_integer {
    ($($t:ty => $via:ty, $f:ident, $max:expr;)*) => {
        $(
            impl Integer for $t {
                const MAX_LEN: usize = $max;

                #[inline]
                fn write_dec(self, buf: &mut [u8]) -> usize {
                    $f(self as $via, buf)
                }
            }
        )*
    };
}

impl_integer! {
    u8 => u32, u32toa, 3;
    u16 => u32, u32toa, 5;
    u32 => u32, u32toa, U32_DEC_LEN;
    u64 => u64, u64toa, U64_DEC_LEN;
    usize => u64, u64toa, U64_DEC_LEN;
    i8 => i32, i32toa, 4;
    i16 => i32, i32toa, 6;
    i32 => i32, i32toa, I32_DEC_LEN;
    i64 => i64, i64toa, I64_DEC_LEN;
    isize => i64, i64toa, I64_DEC_LEN;
}

/// Unsigned integers with a `0x`-prefixed hex fast path.
pub trait HexInteger: sealed::Sealed + Copy {
    /// Longest hex text this type can produce, prefix included.
    const MAX_HEX_LEN: usize;

    /// Write `self` as `0x…` into `buf`, returning the length.
    fn write_hex(self, buf: &mut [u8]) -> usize;
}

impl HexInteger for u32 {
    const MAX_HEX_LEN: usize = U32_HEX_LEN;

    #[inline]
    fn write_hex(self, buf: &mut [u8]) -> usize {
        u32toh(self, buf)
    }
}

impl HexInteger for u64 {
    const MAX_HEX_LEN: usize = U64_HEX_LEN;

    #[inline]
    fn write_hex(self, buf: &mut [u8]) -> usize {
        u64toh(self, buf)
    }
}

impl HexInteger for usize {
    const MAX_HEX_LEN: usize = U64_HEX_LEN;

    #[inline]
    fn write_hex(self, buf: &mut [u8]) -> usize {
        u64toh(self as u64, buf)
    }
}
