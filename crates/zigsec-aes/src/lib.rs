// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128 forward cipher.
//!
//! Implementation per FIPS-197, encrypt direction only. CCM (CTR keystream and
//! CBC-MAC) and the Matyas-Meyer-Oseas hash never need the inverse cipher, so
//! none is provided. The expanded key schedule is zeroized on drop.
//!
//! References:
//! - FIPS-197: Advanced Encryption Standard (AES)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.197-upd1.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cipher;
mod consts;

pub use cipher::Aes128;
pub use consts::{BLOCK_LEN, KEY_LEN, ROUNDS};

/// 128-bit cipher key
pub type Key = [u8; KEY_LEN];

/// 128-bit cipher block
pub type Block = [u8; BLOCK_LEN];

/// Encrypts a single block under `key`.
///
/// Expands the key, runs the forward permutation and drops (zeroizes) the
/// schedule. Callers encrypting several blocks under one key should keep an
/// [`Aes128`] instead.
///
/// # Example
///
/// ```
/// use zigsec_aes::encrypt_block;
///
/// let key = [0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
///            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c];
/// let plaintext = [0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d,
///                  0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07, 0x34];
///
/// let ciphertext = encrypt_block(&key, &plaintext);
/// assert_eq!(&ciphertext[..4], &[0x39, 0x25, 0x84, 0x1d]);
/// ```
pub fn encrypt_block(key: &Key, block: &Block) -> Block {
    Aes128::new(key).encrypt(block)
}
