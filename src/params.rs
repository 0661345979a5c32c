//! Fixed parameters of the Rijndael block cipher

/// Rijndael block size in bytes
pub const RIJNDAEL_BLOCK_SIZE: usize = 16;

/// Rijndael-128 key size in bytes
pub const RIJNDAEL128_KEY_SIZE: usize = 16;

/// Rijndael-192 key size in bytes
pub const RIJNDAEL192_KEY_SIZE: usize = 24;

/// Rijndael-256 key size in bytes
pub const RIJNDAEL256_KEY_SIZE: usize = 32;

/// Number of rounds for a 128-bit key
pub const RIJNDAEL128_ROUNDS: usize = 10;

/// Number of rounds for a 192-bit key
pub const RIJNDAEL192_ROUNDS: usize = 12;

/// Number of rounds for a 256-bit key
pub const RIJNDAEL256_ROUNDS: usize = 14;

/// Largest round count over all key sizes
pub const MAX_ROUNDS: usize = RIJNDAEL256_ROUNDS;

/// Largest number of 32-bit schedule words over all key sizes
pub const MAX_SCHEDULE_WORDS: usize = 4 * (MAX_ROUNDS + 1);
