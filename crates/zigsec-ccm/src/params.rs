// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Validated CCM parameters per NIST SP 800-38C Appendix A.1 and A.2.2

use log::{debug, trace};

use crate::error::CcmError;

/// Shortest permitted nonce (L = 8)
pub const MIN_NONCE_LEN: usize = 7;

/// Longest permitted nonce (L = 2)
pub const MAX_NONCE_LEN: usize = 13;

/// Permitted tag lengths M
pub const TAG_LENS: [usize; 7] = [4, 6, 8, 10, 12, 14, 16];

/// Largest encoded associated-data length prefix (0xFF 0xFF + 8 bytes)
pub const AD_LEN_PREFIX_MAX: usize = 10;

/// Authentication tag length M.
///
/// Only the even values 4..=16 are representable; construction is the only
/// place the range is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagLen(u8);

impl TagLen {
    /// Validates `len` as a CCM tag length
    pub fn new(len: usize) -> Result<Self, CcmError> {
        if TAG_LENS.contains(&len) {
            Ok(Self(len as u8))
        } else {
            debug!("ccm: rejected tag length {}", len);
            Err(CcmError::InvalidTagLength(len))
        }
    }

    /// Tag length in bytes
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// The (M - 2) / 2 field of the B0 flags octet, already shifted into place
    pub(crate) const fn flags_bits(self) -> u8 {
        ((self.0 - 2) / 2) << 3
    }
}

impl TryFrom<usize> for TagLen {
    type Error = CcmError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        Self::new(len)
    }
}

/// Length of the message-length field L for a nonce of `nonce_len` bytes
pub(crate) fn length_field_len(nonce_len: usize) -> Result<usize, CcmError> {
    if (MIN_NONCE_LEN..=MAX_NONCE_LEN).contains(&nonce_len) {
        Ok(15 - nonce_len)
    } else {
        debug!("ccm: rejected nonce length {}", nonce_len);
        Err(CcmError::InvalidNonceLength(nonce_len))
    }
}

/// Largest payload a length field of `l` bytes can encode
pub(crate) const fn max_payload_len(l: usize) -> u64 {
    if l >= 8 {
        u64::MAX
    } else {
        (1u64 << (8 * l)) - 1
    }
}

/// Rejects payloads whose length does not fit `l` bytes
pub(crate) fn check_payload_len(l: usize, len: usize) -> Result<(), CcmError> {
    let max = max_payload_len(l);
    if len as u64 > max {
        debug!("ccm: payload of {} bytes exceeds {}-byte length field", len, l);
        return Err(CcmError::PayloadTooLong { len, max });
    }
    Ok(())
}

/// Nonce length and tag length, validated together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcmParams {
    nonce_len: usize,
    tag_len: TagLen,
}

impl CcmParams {
    /// Validates a nonce length against an already validated tag length
    pub fn new(nonce_len: usize, tag_len: TagLen) -> Result<Self, CcmError> {
        length_field_len(nonce_len)?;
        Ok(Self { nonce_len, tag_len })
    }

    /// Nonce length N
    pub fn nonce_len(&self) -> usize {
        self.nonce_len
    }

    /// Tag length M
    pub fn tag_len(&self) -> TagLen {
        self.tag_len
    }

    /// Length field size L = 15 - N
    pub fn length_field_len(&self) -> usize {
        15 - self.nonce_len
    }

    /// Largest payload length these parameters accept
    pub fn max_payload_len(&self) -> u64 {
        max_payload_len(self.length_field_len())
    }

    /// Rejects payloads that do not fit the length field
    pub fn check_payload_len(&self, len: usize) -> Result<(), CcmError> {
        check_payload_len(self.length_field_len(), len)
    }
}

/// Encoding of the associated-data length a(0) per SP 800-38C A.2.2.
///
/// The width is a pure function of the length; empty associated data has no
/// prefix at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdLenPrefix {
    /// 0 < a < 2^16 - 2^8: two bytes
    Short(u16),
    /// 2^16 - 2^8 <= a < 2^32: 0xFF 0xFE followed by four bytes
    Long(u32),
    /// 2^32 <= a < 2^64: 0xFF 0xFF followed by eight bytes
    ExtraLong(u64),
}

impl AdLenPrefix {
    /// Selects the prefix for `len` bytes of associated data
    pub fn for_len(len: usize) -> Option<Self> {
        let len = len as u64;
        let prefix = match len {
            0 => return None,
            1..0xFF00 => Self::Short(len as u16),
            0xFF00..=0xFFFF_FFFF => Self::Long(len as u32),
            _ => Self::ExtraLong(len),
        };
        trace!("ccm: {}-byte ad length prefix", prefix.encoded_len());
        Some(prefix)
    }

    /// Number of bytes the prefix occupies
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Short(_) => 2,
            Self::Long(_) => 6,
            Self::ExtraLong(_) => 10,
        }
    }

    /// Writes the prefix to the front of `out`, returning the width written
    pub fn encode(&self, out: &mut [u8; AD_LEN_PREFIX_MAX]) -> usize {
        match *self {
            Self::Short(len) => {
                out[..2].copy_from_slice(&len.to_be_bytes());
            }
            Self::Long(len) => {
                out[..2].copy_from_slice(&[0xff, 0xfe]);
                out[2..6].copy_from_slice(&len.to_be_bytes());
            }
            Self::ExtraLong(len) => {
                out[..2].copy_from_slice(&[0xff, 0xff]);
                out[2..10].copy_from_slice(&len.to_be_bytes());
            }
        }
        self.encoded_len()
    }
}
