//! Block cipher primitives
//!
//! This module hosts single-block cipher cores. Modes of operation are a
//! separate layer and live outside this crate.

pub mod rijndael;

// Re-exports
pub use rijndael::{decrypt_block, encrypt_block, Direction, RoundKeys};
