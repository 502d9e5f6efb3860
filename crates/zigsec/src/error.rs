// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Key derivation error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Install code plus CRC is not 8, 10, 14 or 18 bytes
    #[error("invalid install code length {0}: expected a 6, 8, 12 or 16 byte code followed by a 2 byte CRC")]
    InvalidInstallCodeLength(usize),

    /// Trailing CRC-16 does not match the install code
    #[error("install code CRC mismatch: computed {computed:#06x}, received {received:#06x}")]
    InstallCodeCrcMismatch {
        /// CRC computed over the code bytes
        computed: u16,
        /// CRC carried after the code
        received: u16,
    },
}

/// Security level error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevelError {
    /// Value outside 0..=7
    #[error("security level {0} out of range 0..=7")]
    OutOfRange(u8),
}
