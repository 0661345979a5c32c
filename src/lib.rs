//! Table-driven Rijndael (AES) block cipher primitive
//!
//! This crate implements the Rijndael block cipher as standardized in
//! FIPS 197, exposed as a bare single-block primitive: expand a key into a
//! direction-tagged round-key schedule once, then transform 16-byte blocks
//! against that schedule any number of times. Cipher modes, padding, and key
//! management are the caller's responsibility.
//!
//! The round transforms are table-driven: substitution, row shifting, and
//! column mixing are fused into ten 256-entry word tables evaluated at
//! compile time, so every schedule on every thread shares the same immutable
//! constants with no runtime initialization.
//!
//! # Security Features
//!
//! - Round-key schedules are zeroized on drop (and on explicit `zeroize()`),
//!   including the scratch buffer used during expansion
//! - Schedule equality is constant-time
//! - Key lengths are validated before any schedule material is produced
//!
//! Note: the classic table-driven construction is not hardened against
//! cache-timing observation of table indices. Callers needing that property
//! should pair this crate with hardware AES or a bitsliced implementation.
//!
//! # Examples
//!
//! ```
//! use rijndael_core::{decrypt_block, encrypt_block, Direction, RoundKeys};
//!
//! # fn main() -> rijndael_core::Result<()> {
//! let key = [0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
//!            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c];
//!
//! let enc = RoundKeys::expand(&key, Direction::Encrypt)?;
//! let mut ciphertext = [0u8; 16];
//! encrypt_block(&enc, b"sixteen byte msg", None, &mut ciphertext)?;
//!
//! let dec = RoundKeys::expand(&key, Direction::Decrypt)?;
//! let mut recovered = [0u8; 16];
//! decrypt_block(&dec, &ciphertext, None, &mut recovered)?;
//! assert_eq!(&recovered, b"sixteen byte msg");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Algorithm parameters
pub mod params;

// Block cipher primitives
pub mod block;
pub use block::{decrypt_block, encrypt_block, Direction, RoundKeys};
