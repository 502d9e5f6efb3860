// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::error::CcmError;

/// Decrypted payload together with the outcome of tag verification.
///
/// Returned by [`decrypt_unverified`](crate::decrypt_unverified). The payload
/// is zeroized on drop unless it was handed out.
pub struct Opened {
    payload: Vec<u8>,
    authentic: bool,
}

impl core::fmt::Debug for Opened {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Opened {{ [protected], authentic: {} }}", self.authentic)
    }
}

impl Opened {
    pub(crate) fn new(payload: Vec<u8>, authentic: bool) -> Self {
        Self { payload, authentic }
    }

    /// Whether the received tag matched
    pub fn is_authentic(&self) -> bool {
        self.authentic
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Returns the payload only if the tag verified, zeroizing it otherwise
    pub fn into_verified(mut self) -> Result<Vec<u8>, CcmError> {
        if self.authentic {
            Ok(core::mem::take(&mut self.payload))
        } else {
            Err(CcmError::AuthenticationFailed)
        }
    }

    /// Returns the payload regardless of the tag outcome
    pub fn into_untrusted(mut self) -> Vec<u8> {
        core::mem::take(&mut self.payload)
    }
}

impl Drop for Opened {
    fn drop(&mut self) {
        self.payload.zeroize();
    }
}
