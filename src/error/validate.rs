//! Validation utilities for cipher inputs

use super::{Error, Result};
use crate::params::{RIJNDAEL128_KEY_SIZE, RIJNDAEL192_KEY_SIZE, RIJNDAEL256_KEY_SIZE};

/// Validate a Rijndael key length.
///
/// Only the three sizes with a defined round count (16, 24, and 32 bytes)
/// are accepted. Rijndael's historical key-length policy is sometimes
/// stated as a range (16 to 32 bytes in steps of 8); every step inside that
/// range is one of the three sizes, so the range wording and this
/// enumeration describe the same set.
#[inline(always)]
pub fn key_length(actual: usize) -> Result<()> {
    match actual {
        RIJNDAEL128_KEY_SIZE | RIJNDAEL192_KEY_SIZE | RIJNDAEL256_KEY_SIZE => Ok(()),
        _ => Err(Error::KeyLength { actual }),
    }
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Parameter { name, reason });
    }
    Ok(())
}
