//! Scribe: a text-serialization buffer with allocation-free number formatting.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Scribe sub-crates. It is meant to sit under loggers and text/JSON
//! encoders as their write sink.
//!
//! # Quick start
//!
//! ```rust
//! use scribe::prelude::*;
//!
//! let mut buf = TextBuf::with_capacity(64);
//! buf.append("id=").append(42u64).append(" ratio=").append(0.25f64);
//! buf.append(" ok=").append(true).append(" at=").append(Hex(0xbeefu32));
//! assert_eq!(buf, "id=42 ratio=0.25 ok=true at=0xbeef");
//!
//! // Hand the bytes to a collaborator that wants a C string.
//! assert_eq!(buf.as_null_terminated().last(), Some(&0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buf`] | `scribe-buf` | `TextBuf`, the `Append` protocol, config, errors |
//! | [`fmt`] | `scribe-fmt` | Integer and float to ASCII routines |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable buffer and typed appends (`scribe-buf`).
///
/// Most users only need [`buf::TextBuf`] and the [`buf::Append`] trait;
/// both are also in the [`prelude`].
pub use scribe_buf as buf;

/// Allocation-free primitive formatting (`scribe-fmt`).
///
/// Use these directly when writing into memory that is not a
/// [`buf::TextBuf`], such as a stack array.
pub use scribe_fmt as fmt;

pub use scribe_buf::append;

/// Common imports for typical Scribe usage.
///
/// ```rust
/// use scribe::prelude::*;
/// ```
pub mod prelude {
    pub use scribe_buf::{
        Append, BufConfig, BufError, Byte, GrowthPolicy, Hex, ShortF32, TextBuf,
    };
}
