//! Rijndael (AES) block cipher core
//!
//! This module implements the Rijndael block cipher as specified in
//! FIPS 197: 16-byte blocks under 128-, 192-, or 256-bit keys, with the
//! round transforms fused into precomputed lookup tables.
//!
//! A [`RoundKeys`] schedule is expanded once per key and direction, then
//! drives any number of independent block transforms. Decryption schedules
//! are equivalence-transformed at expansion time (round-key order reversed,
//! interior round keys passed through inverse column mixing) so that
//! [`decrypt_block`] walks its keys with the same forward indexing and
//! table-lookup pattern as [`encrypt_block`].
//!
//! Blocks and keys are consumed as raw byte sequences, four consecutive
//! bytes forming one 32-bit word most significant byte first, matching the
//! FIPS 197 test vectors.
//!
//! Schedules are immutable once expanded: any number of threads may
//! transform blocks against a shared schedule concurrently. Re-keying is
//! expressed by expanding a fresh schedule. All schedule material is
//! zeroized on drop.

mod tables;

use byteorder::{BigEndian, ByteOrder};
use core::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{validate, Result};
use crate::params::{MAX_SCHEDULE_WORDS, RIJNDAEL_BLOCK_SIZE};
use self::tables::{RCON, SBOX, TD0, TD1, TD2, TD3, TD4, TE0, TE1, TE2, TE3, TE4};

/// Transform direction a round-key schedule is expanded for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward transform: plaintext block to ciphertext block
    Encrypt,
    /// Inverse transform: ciphertext block to plaintext block
    Decrypt,
}

/// Expanded round-key schedule for one key and one direction
///
/// Produced by [`RoundKeys::expand`] and immutable afterwards. Holds
/// `4 * (rounds + 1)` schedule words, where `rounds` is 10, 12, or 14
/// depending on key length. The words are zeroized when the schedule is
/// dropped; `Debug` output redacts them, and equality compares them in
/// constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    words: [u32; MAX_SCHEDULE_WORDS],
    rounds: usize,
    #[zeroize(skip)]
    direction: Direction,
}

impl RoundKeys {
    /// Expand `key` into the round-key schedule for `direction`.
    ///
    /// `key` must be exactly 16, 24, or 32 bytes; any other length is
    /// rejected with [`Error::KeyLength`](crate::Error::KeyLength) before
    /// any schedule material is derived. The caller's key buffer is read
    /// once and never retained.
    ///
    /// For [`Direction::Decrypt`] the schedule is additionally passed
    /// through the equivalent-inverse-cipher transform, so the returned
    /// schedule is only usable with the matching transform function.
    pub fn expand(key: &[u8], direction: Direction) -> Result<Self> {
        validate::key_length(key.len())?;

        let nk = key.len() / 4;
        let rounds = nk + 6;
        let total = 4 * (rounds + 1);

        // Scratch schedule, erased on every exit path.
        let mut w = Zeroizing::new([0u32; MAX_SCHEDULE_WORDS]);

        for i in 0..nk {
            w[i] = BigEndian::read_u32(&key[4 * i..4 * i + 4]);
        }
        for i in nk..total {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
            } else if nk == 8 && i % nk == 4 {
                temp = sub_word(temp);
            }
            w[i] = w[i - nk] ^ temp;
        }

        if direction == Direction::Decrypt {
            // Reverse the round-key order so the inverse transform consumes
            // its keys with the same forward indexing as encryption.
            let (mut i, mut j) = (0, 4 * rounds);
            while i < j {
                for k in 0..4 {
                    w.swap(i + k, j + k);
                }
                i += 4;
                j -= 4;
            }
            // Interior round keys absorb the inverse column mixing; the
            // first and last are applied outside any mixing step and stay
            // as expanded.
            for word in w[4..4 * rounds].iter_mut() {
                *word = inv_mix_word(*word);
            }
        }

        let mut schedule = RoundKeys {
            words: [0u32; MAX_SCHEDULE_WORDS],
            rounds,
            direction,
        };
        schedule.words[..total].copy_from_slice(&w[..total]);
        Ok(schedule)
    }

    /// Number of rounds this schedule drives (10, 12, or 14)
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Direction this schedule was expanded for
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RoundKeys {{ rounds: {}, direction: {:?}, words: [REDACTED] }}",
            self.rounds, self.direction
        )
    }
}

impl PartialEq for RoundKeys {
    fn eq(&self, other: &Self) -> bool {
        self.rounds == other.rounds
            && self.direction == other.direction
            && bool::from(self.words[..].ct_eq(&other.words[..]))
    }
}

impl Eq for RoundKeys {}

/// Apply the S-box to each byte of a schedule word
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    ((SBOX[(word >> 24) as usize] as u32) << 24)
        | ((SBOX[((word >> 16) & 0xff) as usize] as u32) << 16)
        | ((SBOX[((word >> 8) & 0xff) as usize] as u32) << 8)
        | (SBOX[(word & 0xff) as usize] as u32)
}

/// Inverse column mixing on one schedule word. TD maps y through the
/// inverse S-box before mixing, so feeding it SBOX[b] mixes b itself.
#[inline(always)]
fn inv_mix_word(word: u32) -> u32 {
    TD0[SBOX[(word >> 24) as usize] as usize]
        ^ TD1[SBOX[((word >> 16) & 0xff) as usize] as usize]
        ^ TD2[SBOX[((word >> 8) & 0xff) as usize] as usize]
        ^ TD3[SBOX[(word & 0xff) as usize] as usize]
}

#[inline(always)]
fn validate_block_args(input: &[u8], xor_mask: Option<&[u8]>, output: &[u8]) -> Result<()> {
    validate::length("input block", input.len(), RIJNDAEL_BLOCK_SIZE)?;
    validate::length("output block", output.len(), RIJNDAEL_BLOCK_SIZE)?;
    if let Some(mask) = xor_mask {
        validate::length("xor mask", mask.len(), RIJNDAEL_BLOCK_SIZE)?;
    }
    Ok(())
}

#[inline(always)]
fn write_state(state: [u32; 4], xor_mask: Option<&[u8]>, output: &mut [u8]) {
    for (i, word) in state.iter().enumerate() {
        BigEndian::write_u32(&mut output[4 * i..4 * i + 4], *word);
    }
    if let Some(mask) = xor_mask {
        for (byte, m) in output.iter_mut().zip(mask) {
            *byte ^= m;
        }
    }
}

/// Encrypt one 16-byte block.
///
/// `keys` must have been expanded with [`Direction::Encrypt`]. `input` and
/// `output` must be exactly 16 bytes; if `xor_mask` is
/// supplied it must also be 16 bytes and is XOR-ed into the result before
/// it is written, which lets a counter-style construction fold its mask
/// into the block transform. Once the arguments pass validation the
/// transform itself cannot fail.
pub fn encrypt_block(
    keys: &RoundKeys,
    input: &[u8],
    xor_mask: Option<&[u8]>,
    output: &mut [u8],
) -> Result<()> {
    validate::parameter(
        keys.direction == Direction::Encrypt,
        "schedule",
        "expanded for decryption, not encryption",
    )?;
    validate_block_args(input, xor_mask, output)?;

    let rk = &keys.words;
    let mut s0 = BigEndian::read_u32(&input[0..4]) ^ rk[0];
    let mut s1 = BigEndian::read_u32(&input[4..8]) ^ rk[1];
    let mut s2 = BigEndian::read_u32(&input[8..12]) ^ rk[2];
    let mut s3 = BigEndian::read_u32(&input[12..16]) ^ rk[3];

    for round in 1..keys.rounds {
        let k = 4 * round;
        let t0 = TE0[(s0 >> 24) as usize]
            ^ TE1[((s1 >> 16) & 0xff) as usize]
            ^ TE2[((s2 >> 8) & 0xff) as usize]
            ^ TE3[(s3 & 0xff) as usize]
            ^ rk[k];
        let t1 = TE0[(s1 >> 24) as usize]
            ^ TE1[((s2 >> 16) & 0xff) as usize]
            ^ TE2[((s3 >> 8) & 0xff) as usize]
            ^ TE3[(s0 & 0xff) as usize]
            ^ rk[k + 1];
        let t2 = TE0[(s2 >> 24) as usize]
            ^ TE1[((s3 >> 16) & 0xff) as usize]
            ^ TE2[((s0 >> 8) & 0xff) as usize]
            ^ TE3[(s1 & 0xff) as usize]
            ^ rk[k + 2];
        let t3 = TE0[(s3 >> 24) as usize]
            ^ TE1[((s0 >> 16) & 0xff) as usize]
            ^ TE2[((s1 >> 8) & 0xff) as usize]
            ^ TE3[(s2 & 0xff) as usize]
            ^ rk[k + 3];
        s0 = t0;
        s1 = t1;
        s2 = t2;
        s3 = t3;
    }

    // Final round: substitution and row shift only, no column mixing.
    let k = 4 * keys.rounds;
    let out = [
        (TE4[(s0 >> 24) as usize] & 0xff00_0000)
            ^ (TE4[((s1 >> 16) & 0xff) as usize] & 0x00ff_0000)
            ^ (TE4[((s2 >> 8) & 0xff) as usize] & 0x0000_ff00)
            ^ (TE4[(s3 & 0xff) as usize] & 0x0000_00ff)
            ^ rk[k],
        (TE4[(s1 >> 24) as usize] & 0xff00_0000)
            ^ (TE4[((s2 >> 16) & 0xff) as usize] & 0x00ff_0000)
            ^ (TE4[((s3 >> 8) & 0xff) as usize] & 0x0000_ff00)
            ^ (TE4[(s0 & 0xff) as usize] & 0x0000_00ff)
            ^ rk[k + 1],
        (TE4[(s2 >> 24) as usize] & 0xff00_0000)
            ^ (TE4[((s3 >> 16) & 0xff) as usize] & 0x00ff_0000)
            ^ (TE4[((s0 >> 8) & 0xff) as usize] & 0x0000_ff00)
            ^ (TE4[(s1 & 0xff) as usize] & 0x0000_00ff)
            ^ rk[k + 2],
        (TE4[(s3 >> 24) as usize] & 0xff00_0000)
            ^ (TE4[((s0 >> 16) & 0xff) as usize] & 0x00ff_0000)
            ^ (TE4[((s1 >> 8) & 0xff) as usize] & 0x0000_ff00)
            ^ (TE4[(s2 & 0xff) as usize] & 0x0000_00ff)
            ^ rk[k + 3],
    ];

    write_state(out, xor_mask, output);
    Ok(())
}

/// Decrypt one 16-byte block.
///
/// `keys` must have been expanded with [`Direction::Decrypt`]; the
/// equivalence transform applied at expansion time lets this function walk
/// the schedule in the same forward index order as [`encrypt_block`].
/// Argument contract and mask behavior are the same as for
/// [`encrypt_block`].
pub fn decrypt_block(
    keys: &RoundKeys,
    input: &[u8],
    xor_mask: Option<&[u8]>,
    output: &mut [u8],
) -> Result<()> {
    validate::parameter(
        keys.direction == Direction::Decrypt,
        "schedule",
        "expanded for encryption, not decryption",
    )?;
    validate_block_args(input, xor_mask, output)?;

    let rk = &keys.words;
    let mut s0 = BigEndian::read_u32(&input[0..4]) ^ rk[0];
    let mut s1 = BigEndian::read_u32(&input[4..8]) ^ rk[1];
    let mut s2 = BigEndian::read_u32(&input[8..12]) ^ rk[2];
    let mut s3 = BigEndian::read_u32(&input[12..16]) ^ rk[3];

    for round in 1..keys.rounds {
        let k = 4 * round;
        let t0 = TD0[(s0 >> 24) as usize]
            ^ TD1[((s3 >> 16) & 0xff) as usize]
            ^ TD2[((s2 >> 8) & 0xff) as usize]
            ^ TD3[(s1 & 0xff) as usize]
            ^ rk[k];
        let t1 = TD0[(s1 >> 24) as usize]
            ^ TD1[((s0 >> 16) & 0xff) as usize]
            ^ TD2[((s3 >> 8) & 0xff) as usize]
            ^ TD3[(s2 & 0xff) as usize]
            ^ rk[k + 1];
        let t2 = TD0[(s2 >> 24) as usize]
            ^ TD1[((s1 >> 16) & 0xff) as usize]
            ^ TD2[((s0 >> 8) & 0xff) as usize]
            ^ TD3[(s3 & 0xff) as usize]
            ^ rk[k + 2];
        let t3 = TD0[(s3 >> 24) as usize]
            ^ TD1[((s2 >> 16) & 0xff) as usize]
            ^ TD2[((s1 >> 8) & 0xff) as usize]
            ^ TD3[(s0 & 0xff) as usize]
            ^ rk[k + 3];
        s0 = t0;
        s1 = t1;
        s2 = t2;
        s3 = t3;
    }

    // Final round: inverse substitution and row shift only.
    let k = 4 * keys.rounds;
    let out = [
        (TD4[(s0 >> 24) as usize] & 0xff00_0000)
            ^ (TD4[((s3 >> 16) & 0xff) as usize] & 0x00ff_0000)
            ^ (TD4[((s2 >> 8) & 0xff) as usize] & 0x0000_ff00)
            ^ (TD4[(s1 & 0xff) as usize] & 0x0000_00ff)
            ^ rk[k],
        (TD4[(s1 >> 24) as usize] & 0xff00_0000)
            ^ (TD4[((s0 >> 16) & 0xff) as usize] & 0x00ff_0000)
            ^ (TD4[((s3 >> 8) & 0xff) as usize] & 0x0000_ff00)
            ^ (TD4[(s2 & 0xff) as usize] & 0x0000_00ff)
            ^ rk[k + 1],
        (TD4[(s2 >> 24) as usize] & 0xff00_0000)
            ^ (TD4[((s1 >> 16) & 0xff) as usize] & 0x00ff_0000)
            ^ (TD4[((s0 >> 8) & 0xff) as usize] & 0x0000_ff00)
            ^ (TD4[(s3 & 0xff) as usize] & 0x0000_00ff)
            ^ rk[k + 2],
        (TD4[(s3 >> 24) as usize] & 0xff00_0000)
            ^ (TD4[((s2 >> 16) & 0xff) as usize] & 0x00ff_0000)
            ^ (TD4[((s1 >> 8) & 0xff) as usize] & 0x0000_ff00)
            ^ (TD4[(s0 & 0xff) as usize] & 0x0000_00ff)
            ^ rk[k + 3],
    ];

    write_state(out, xor_mask, output);
    Ok(())
}
