// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128 CCM and ZigBee CCM* authenticated encryption.
//!
//! Implementation per NIST SP 800-38C, built only on the AES forward cipher.
//! Nonces of 7 to 13 bytes and tags of 4 to 16 (even) bytes are accepted;
//! CCM* encryption-only mode is exposed as [`apply_keystream`].
//!
//! Decryption fails closed: [`decrypt`] never returns plaintext whose tag did
//! not verify. [`decrypt_unverified`] is the explicit opt-in for callers that
//! need the payload and the verdict separately.
//!
//! References:
//! - NIST SP 800-38C: The CCM Mode for Authentication and Confidentiality
//!   <https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38c.pdf>
//! - RFC 3610: Counter with CBC-MAC (CCM)
//!   <https://datatracker.ietf.org/doc/html/rfc3610>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod aead;
mod ccm;
mod error;
mod opened;
mod params;

pub use aead::{decrypt, decrypt_unverified, encrypt};
pub use ccm::{apply_keystream, Ccm};
pub use error::CcmError;
pub use opened::Opened;
pub use params::{AdLenPrefix, CcmParams, TagLen, AD_LEN_PREFIX_MAX, MAX_NONCE_LEN, MIN_NONCE_LEN, TAG_LENS};
