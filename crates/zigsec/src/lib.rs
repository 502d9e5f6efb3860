// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ZigBee security primitives.
//!
//! The building blocks a ZigBee or ZigBee Direct security manager needs:
//!
//! - [`aes`]: AES-128 forward cipher (FIPS-197)
//! - [`ccm`]: AES-CCM / CCM* authenticated encryption (NIST SP 800-38C)
//! - [`mmo`]: Matyas-Meyer-Oseas hash and HMAC-MMO
//! - CCM* framing by [`SecurityLevel`], nonce assembly and link key
//!   derivations
//!
//! Every transform takes a whole message and returns owned output. Keys,
//! key schedules and intermediate blocks are zeroized after use.
//!
//! # Quick Start
//!
//! ```rust
//! use zigsec::{secure, unsecure, CcmStarNonce, SecurityLevel};
//!
//! let key = [0xc0u8; 16];
//! let nonce = CcmStarNonce::new(0x0011_2233_4455_6677, 42, SecurityLevel::EncMic32.as_u8());
//!
//! let frame = secure(&key, &nonce, SecurityLevel::EncMic32, b"nwk header", b"hello").unwrap();
//! let payload = unsecure(&key, &nonce, SecurityLevel::EncMic32, b"nwk header", &frame).unwrap();
//!
//! assert_eq!(payload, b"hello");
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod frame;
mod keys;
mod level;
mod nonce;

pub use zigsec_aes as aes;
pub use zigsec_ccm as ccm;
pub use zigsec_mmo as mmo;
pub use zigsec_util as util;

pub use zigsec_aes::{encrypt_block, Block, Key};
pub use zigsec_ccm::{decrypt, decrypt_unverified, encrypt, CcmError, Opened, TagLen};
pub use zigsec_mmo::{hmac_mmo, mmo_hash, Digest};

pub use error::{KeyError, SecurityLevelError};
pub use frame::{secure, unsecure};
pub use keys::{
    install_code_crc, link_key_from_install_code, load_key, transport_key, INSTALL_CODE_LENS,
};
pub use level::SecurityLevel;
pub use nonce::{CcmStarNonce, NONCE_LEN};
