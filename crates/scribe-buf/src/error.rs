//! Buffer error types.
//!
//! The infallible API treats allocator exhaustion as fatal. These errors
//! surface only from the `try_*` growth methods and the checked text views.

use std::error::Error;
use std::fmt;

/// Errors that can occur during buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufError {
    /// The requested capacity does not fit in `isize::MAX` bytes.
    CapacityOverflow,
    /// The allocator could not provide the requested block.
    AllocFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// The content holds a `0` byte, so it cannot be viewed as a C string.
    InteriorNul {
        /// Offset of the first `0` byte.
        position: usize,
    },
    /// The content is not valid UTF-8.
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

impl fmt::Display for BufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => write!(f, "buffer capacity overflow"),
            Self::AllocFailed { requested } => {
                write!(f, "allocation of {requested} bytes failed")
            }
            Self::InteriorNul { position } => {
                write!(f, "interior nul byte at offset {position}")
            }
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "invalid utf-8 after {valid_up_to} bytes")
            }
        }
    }
}

impl Error for BufError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offset() {
        let err = BufError::InteriorNul { position: 3 };
        assert_eq!(err.to_string(), "interior nul byte at offset 3");
        let err = BufError::AllocFailed { requested: 64 };
        assert_eq!(err.to_string(), "allocation of 64 bytes failed");
    }
}
