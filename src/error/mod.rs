//! Error handling for the block-cipher core

use core::fmt;

/// The error type for block-cipher operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key length outside the defined Rijndael key sizes
    KeyLength {
        /// Length of the rejected key in bytes
        actual: usize,
    },

    /// Length validation error for a block-sized argument
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },
}

/// Result type for block-cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyLength { actual } => {
                write!(
                    f,
                    "Invalid key length {}: must be 16, 24, or 32 bytes",
                    actual
                )
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
