// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CCM* frame protection per ZigBee Specification Annex A
//!
//! CCM* extends CCM with MIC-free and encryption-free levels. MIC-only levels
//! authenticate `ad || payload` and send the payload in clear; the
//! encryption-only level is the bare CTR keystream.

use alloc::vec::Vec;

use log::debug;
use zeroize::Zeroize;
use zigsec_aes::Key;
use zigsec_ccm::{apply_keystream, Ccm, CcmError, TagLen};
use zigsec_util::try_split_from_end;

use crate::level::SecurityLevel;
use crate::nonce::CcmStarNonce;

/// Protects `payload` at `level`.
///
/// # Returns
/// The transmitted payload followed by the MIC, if any:
/// - encrypted levels: `ciphertext || mic`
/// - MIC-only levels: `payload || mic`
/// - [`SecurityLevel::None`]: `payload`
pub fn secure(
    key: &Key,
    nonce: &CcmStarNonce,
    level: SecurityLevel,
    ad: &[u8],
    payload: &[u8],
) -> Result<Vec<u8>, CcmError> {
    let nonce = nonce.as_bytes();

    match (level.is_encrypted(), level.mic_len()) {
        (false, 0) => Ok(payload.to_vec()),
        (true, 0) => {
            let mut out = payload.to_vec();
            if let Err(err) = apply_keystream(key, nonce, &mut out) {
                out.zeroize();
                return Err(err);
            }
            Ok(out)
        }
        (true, mic_len) => zigsec_ccm::encrypt(key, nonce, ad, payload, mic_len),
        (false, mic_len) => {
            let tag_len = TagLen::new(mic_len)?;
            let mut auth = authenticated_data(ad, payload);
            let mut out = Vec::with_capacity(payload.len() + mic_len);
            out.extend_from_slice(payload);
            out.resize(payload.len() + mic_len, 0);

            let result = Ccm::new(key, tag_len).encrypt_in_place_detached(
                nonce,
                &auth,
                &mut [],
                &mut out[payload.len()..],
            );
            auth.zeroize();
            result?;
            Ok(out)
        }
    }
}

/// Verifies and recovers a payload protected at `level`, failing closed.
///
/// `input` is the transmitted payload followed by the MIC, if any.
pub fn unsecure(
    key: &Key,
    nonce: &CcmStarNonce,
    level: SecurityLevel,
    ad: &[u8],
    input: &[u8],
) -> Result<Vec<u8>, CcmError> {
    let nonce = nonce.as_bytes();

    match (level.is_encrypted(), level.mic_len()) {
        (false, 0) => Ok(input.to_vec()),
        (true, 0) => {
            let mut out = input.to_vec();
            if let Err(err) = apply_keystream(key, nonce, &mut out) {
                out.zeroize();
                return Err(err);
            }
            Ok(out)
        }
        (true, mic_len) => zigsec_ccm::decrypt(key, nonce, ad, input, mic_len),
        (false, mic_len) => {
            let tag_len = TagLen::new(mic_len)?;
            let (payload, mic) =
                try_split_from_end(input, mic_len).ok_or(CcmError::InputTooShort {
                    len: input.len(),
                    tag_len: mic_len,
                })?;

            let mut auth = authenticated_data(ad, payload);
            let result =
                Ccm::new(key, tag_len).decrypt_in_place_detached(nonce, &auth, &mut [], mic);
            auth.zeroize();

            if result.is_err() {
                debug!("ccm*: MIC-only frame failed verification at level {}", level.as_u8());
            }
            result?;
            Ok(payload.to_vec())
        }
    }
}

/// a = ad || payload for MIC-only levels
fn authenticated_data(ad: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut auth = Vec::with_capacity(ad.len() + payload.len());
    auth.extend_from_slice(ad);
    auth.extend_from_slice(payload);
    auth
}
