//! Allocation-free primitive-to-text conversion for Scribe.
//!
//! This is the leaf crate of the workspace. Every routine writes straight
//! into a caller-supplied byte slice and returns the number of bytes
//! written, so a buffer can format into its spare capacity and then commit
//! the length. Nothing here allocates, keeps state, or fails; a destination
//! that is too short panics on the slice bound.
//!
//! - [`int`]: decimal and `0x` hex for 8–64 bit integers.
//! - [`float`]: shortest round-trip text for `f64` (via `ryu`); `f32` is
//!   promoted unless [`ftoa_short`] is asked for.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod float;
pub mod int;

pub use float::{dtoa, ftoa, ftoa_short, Float, FLOAT_LEN};
pub use int::{
    i32toa, i64toa, u32toa, u32toh, u64toa, u64toh, HexInteger, Integer, I32_DEC_LEN,
    I64_DEC_LEN, U32_DEC_LEN, U32_HEX_LEN, U64_DEC_LEN, U64_HEX_LEN,
};
