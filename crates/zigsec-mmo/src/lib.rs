// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ZigBee Matyas-Meyer-Oseas hash and HMAC-MMO
//!
//! Implementation per ZigBee Specification Annex B.6 (cryptographic hash
//! function) and B.1.4 (keyed hash function for message authentication),
//! built on the AES-128 forward cipher. Chaining values and HMAC pads are
//! zeroized after use.
//!
//! References:
//! - ZigBee Specification 05-3474, Annex B.6 and Annex C.5, C.6
//! - FIPS-198: The Keyed-Hash Message Authentication Code (HMAC)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod hmac;
mod mmo;

use zigsec_aes::Key;

use hmac::HmacMmoState;
use mmo::MmoState;

/// Digest size in bytes
pub const DIGEST_LEN: usize = 16;

/// 128-bit MMO digest
pub type Digest = [u8; DIGEST_LEN];

/// Hashes `message` with the ZigBee MMO construction.
///
/// # Example
///
/// ```
/// use zigsec_mmo::mmo_hash;
///
/// // ZigBee Annex C.5.1
/// let digest = mmo_hash(&[0xc0]);
/// assert_eq!(&digest[..4], &[0xae, 0x3a, 0x10, 0x2a]);
/// ```
pub fn mmo_hash(message: &[u8]) -> Digest {
    let mut state = MmoState::new();
    let mut out = [0u8; DIGEST_LEN];
    state.update(message);
    state.finalize(&mut out);
    out
}

/// Computes HMAC-MMO of `message` under a 16-byte `key`.
///
/// # Example
///
/// ```
/// use zigsec_mmo::hmac_mmo;
///
/// // ZigBee Annex C.6.1
/// let key = [0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47,
///            0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f];
/// let mac = hmac_mmo(&[0xc0], &key);
/// assert_eq!(&mac[..4], &[0x45, 0x12, 0x80, 0x7b]);
/// ```
pub fn hmac_mmo(message: &[u8], key: &Key) -> Digest {
    let mut state = HmacMmoState::new();
    let mut out = [0u8; DIGEST_LEN];
    state.mac(key, message, &mut out);
    out
}
