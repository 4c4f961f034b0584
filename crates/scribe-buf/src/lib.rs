//! Growable text buffer with typed, allocation-amortized appends.
//!
//! [`TextBuf`] owns a single contiguous byte block. Values are appended in
//! their text form by formatting straight into the spare capacity and then
//! committing the written length, so steady-state appends never allocate.
//! This crate is the only one in the workspace that may contain `unsafe`
//! code, and most of it lives in `raw.rs`.
//!
//! # Architecture
//!
//! ```text
//! TextBuf::append(value)
//! └── Append impl for the value's type
//!     ├── TextBuf::ensure(worst-case bytes)   grow by GrowthPolicy
//!     │   └── raw::allocate_zeroed / raw::reallocate
//!     ├── scribe_fmt::{u64toa, i64toa, u64toh, dtoa, ...} into spare_mut()
//!     └── TextBuf::advance(bytes written)
//! ```
//!
//! # Failure model
//!
//! - Allocator exhaustion on the infallible path is fatal
//!   ([`std::alloc::handle_alloc_error`]). Callers that must survive it use
//!   [`TextBuf::try_reserve`] / [`TextBuf::try_ensure`].
//! - Out-of-range indexing and over-committing panic. The unchecked path is
//!   the explicitly `unsafe` [`TextBuf::get_unchecked`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod append;
pub mod buf;
pub mod config;
pub mod error;
mod raw;

// Public re-exports for the primary API surface.
pub use append::{Append, Byte, Hex, ShortF32};
pub use buf::TextBuf;
pub use config::{BufConfig, GrowthPolicy};
pub use error::BufError;
