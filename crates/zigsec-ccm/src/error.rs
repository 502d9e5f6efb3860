// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// CCM error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CcmError {
    /// Nonce length outside 7..=13 bytes
    #[error("invalid nonce length {0}: expected 7 to 13 bytes")]
    InvalidNonceLength(usize),

    /// Tag length not one of 4, 6, 8, 10, 12, 14, 16
    #[error("invalid tag length {0}: expected 4, 6, 8, 10, 12, 14 or 16")]
    InvalidTagLength(usize),

    /// Payload does not fit the length field implied by the nonce length
    #[error("payload length {len} exceeds maximum {max} for this nonce length")]
    PayloadTooLong {
        /// Payload length in bytes
        len: usize,
        /// Largest payload the length field can encode
        max: u64,
    },

    /// Decrypt input shorter than the tag it must carry
    #[error("input length {len} is shorter than tag length {tag_len}")]
    InputTooShort {
        /// Input length in bytes
        len: usize,
        /// Expected tag length in bytes
        tag_len: usize,
    },

    /// Detached tag buffer does not match the configured tag length
    #[error("tag buffer holds {actual} bytes, expected {expected}")]
    TagBufferSize {
        /// Configured tag length
        expected: usize,
        /// Length of the buffer supplied
        actual: usize,
    },

    /// Recomputed tag differs from the received one
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,
}
