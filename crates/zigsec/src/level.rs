// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SecurityLevelError;

/// CCM* security level per ZigBee Specification Table 4.38.
///
/// Bit 2 selects encryption, bits 0..1 select the MIC length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SecurityLevel {
    /// No protection
    None = 0,
    /// 32-bit MIC, payload in clear
    Mic32 = 1,
    /// 64-bit MIC, payload in clear
    Mic64 = 2,
    /// 128-bit MIC, payload in clear
    Mic128 = 3,
    /// Encryption without MIC
    Enc = 4,
    /// Encryption with 32-bit MIC
    EncMic32 = 5,
    /// Encryption with 64-bit MIC
    EncMic64 = 6,
    /// Encryption with 128-bit MIC
    EncMic128 = 7,
}

impl SecurityLevel {
    /// MIC length M in bytes (0, 4, 8 or 16)
    pub const fn mic_len(self) -> usize {
        match self as u8 & 0x03 {
            0 => 0,
            1 => 4,
            2 => 8,
            _ => 16,
        }
    }

    /// Whether the payload is encrypted
    pub const fn is_encrypted(self) -> bool {
        self as u8 & 0x04 != 0
    }

    /// Level as carried in the security control field
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for SecurityLevel {
    type Error = SecurityLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Mic32),
            2 => Ok(Self::Mic64),
            3 => Ok(Self::Mic128),
            4 => Ok(Self::Enc),
            5 => Ok(Self::EncMic32),
            6 => Ok(Self::EncMic64),
            7 => Ok(Self::EncMic128),
            _ => Err(SecurityLevelError::OutOfRange(value)),
        }
    }
}

impl From<SecurityLevel> for u8 {
    fn from(level: SecurityLevel) -> Self {
        level.as_u8()
    }
}
