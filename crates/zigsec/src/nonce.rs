// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CCM* nonce per ZigBee Specification Section 4.5.2.2

/// CCM* nonce length in bytes
pub const NONCE_LEN: usize = 13;

/// 13-byte ZigBee CCM* nonce.
///
/// Layout: source IEEE address (8 bytes, least significant first), frame
/// counter (4 bytes, little-endian), security control octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CcmStarNonce([u8; NONCE_LEN]);

impl CcmStarNonce {
    /// Assembles the nonce for a frame from `source_address`
    pub fn new(source_address: u64, frame_counter: u32, security_control: u8) -> Self {
        let mut bytes = [0u8; NONCE_LEN];
        bytes[..8].copy_from_slice(&source_address.to_le_bytes());
        bytes[8..12].copy_from_slice(&frame_counter.to_le_bytes());
        bytes[12] = security_control;
        Self(bytes)
    }

    /// Nonce bytes as passed to CCM
    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }

    /// Source IEEE address
    pub fn source_address(&self) -> u64 {
        let mut address = [0u8; 8];
        address.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(address)
    }

    /// Outgoing frame counter of the sender
    pub fn frame_counter(&self) -> u32 {
        let mut counter = [0u8; 4];
        counter.copy_from_slice(&self.0[8..12]);
        u32::from_le_bytes(counter)
    }

    /// Security control octet
    pub fn security_control(&self) -> u8 {
        self.0[12]
    }
}

impl From<[u8; NONCE_LEN]> for CcmStarNonce {
    fn from(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for CcmStarNonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
