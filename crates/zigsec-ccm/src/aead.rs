// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot CCM over owned buffers

use alloc::vec::Vec;

use zeroize::Zeroize;
use zigsec_aes::Key;
use zigsec_util::try_split_from_end;

use crate::ccm::Ccm;
use crate::error::CcmError;
use crate::opened::Opened;
use crate::params::{CcmParams, TagLen};

/// Encrypts `payload` and authenticates it together with `ad`.
///
/// # Arguments
/// - `key`: 16-byte AES key
/// - `nonce`: 7 to 13 bytes, unique per key
/// - `ad`: associated data, authenticated but not encrypted
/// - `payload`: plaintext
/// - `tag_len`: tag length M, one of 4, 6, 8, 10, 12, 14, 16
///
/// # Returns
/// `ciphertext || tag`, `payload.len() + tag_len` bytes
///
/// # Example
///
/// ```
/// let key = [0x40u8; 16];
/// let nonce = [0x10u8; 13];
///
/// let sealed = zigsec_ccm::encrypt(&key, &nonce, b"header", b"payload", 8).unwrap();
/// assert_eq!(sealed.len(), 7 + 8);
///
/// let opened = zigsec_ccm::decrypt(&key, &nonce, b"header", &sealed, 8).unwrap();
/// assert_eq!(opened, b"payload");
/// ```
pub fn encrypt(
    key: &Key,
    nonce: &[u8],
    ad: &[u8],
    payload: &[u8],
    tag_len: usize,
) -> Result<Vec<u8>, CcmError> {
    let tag_len = TagLen::new(tag_len)?;
    CcmParams::new(nonce.len(), tag_len)?.check_payload_len(payload.len())?;

    let mut out = Vec::with_capacity(payload.len() + tag_len.get());
    out.extend_from_slice(payload);
    out.resize(payload.len() + tag_len.get(), 0);

    let (data, tag) = out.split_at_mut(payload.len());
    if let Err(err) = Ccm::new(key, tag_len).encrypt_in_place_detached(nonce, ad, data, tag) {
        out.zeroize();
        return Err(err);
    }

    Ok(out)
}

/// Decrypts `ciphertext || tag` and verifies it, failing closed.
///
/// # Returns
/// - `Ok(plaintext)` if the tag verifies
/// - `Err(CcmError::AuthenticationFailed)` otherwise; the recovered
///   plaintext is zeroized and never returned
pub fn decrypt(
    key: &Key,
    nonce: &[u8],
    ad: &[u8],
    input: &[u8],
    tag_len: usize,
) -> Result<Vec<u8>, CcmError> {
    decrypt_unverified(key, nonce, ad, input, tag_len)?.into_verified()
}

/// Decrypts `ciphertext || tag` and reports authenticity alongside the payload.
///
/// Parameter errors are still errors; only the tag check is deferred to the
/// caller through [`Opened`].
pub fn decrypt_unverified(
    key: &Key,
    nonce: &[u8],
    ad: &[u8],
    input: &[u8],
    tag_len: usize,
) -> Result<Opened, CcmError> {
    let tag_len = TagLen::new(tag_len)?;
    CcmParams::new(nonce.len(), tag_len)?;

    let (ciphertext, tag) =
        try_split_from_end(input, tag_len.get()).ok_or(CcmError::InputTooShort {
            len: input.len(),
            tag_len: tag_len.get(),
        })?;

    let mut payload = ciphertext.to_vec();
    match Ccm::new(key, tag_len).open_in_place(nonce, ad, &mut payload, tag) {
        Ok(authentic) => Ok(Opened::new(payload, authentic)),
        Err(err) => {
            payload.zeroize();
            Err(err)
        }
    }
}
