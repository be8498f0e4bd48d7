//! Error types for elementa
//!
//! Elementary functions and the iteration protocol never fail: domain
//! violations become NaN or infinities and exhaustion is `None`. The only
//! fallible operations in the workspace are shape conversions (slice to
//! fixed-width vector, iterable to array), and they report through this type.

use thiserror::Error;

/// Core error type for elementa operations
#[derive(Error, Debug)]
pub enum Error {
    /// A fixed-width destination received the wrong number of elements
    #[error("Length mismatch in {context}: expected {expected} elements, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        context: &'static str,
    },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &'static str) -> Self {
        Self::LengthMismatch {
            expected,
            actual,
            context,
        }
    }
}
