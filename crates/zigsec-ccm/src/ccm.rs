// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CCM per NIST SP 800-38C Section 6 and Appendix A

use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};
use zigsec_aes::{Aes128, Block, Key, BLOCK_LEN};
use zigsec_util::{constant_time_eq, xor_in_place};

use crate::error::CcmError;
use crate::params::{self, AdLenPrefix, CcmParams, TagLen, AD_LEN_PREFIX_MAX};

/// Adata bit of the B0 flags octet
const ADATA_FLAG: u8 = 0x40;

/// AES-128 CCM keyed with a fixed tag length.
///
/// Expands the key once; every call takes its own nonce. Tags are written to
/// and read from detached buffers that must be exactly `tag_len` bytes.
pub struct Ccm {
    cipher: Aes128,
    tag_len: TagLen,
}

impl core::fmt::Debug for Ccm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ccm {{ [protected], tag_len: {} }}", self.tag_len.get())
    }
}

impl Ccm {
    /// Creates a CCM instance for `key` producing `tag_len`-byte tags
    pub fn new(key: &Key, tag_len: TagLen) -> Self {
        Self {
            cipher: Aes128::new(key),
            tag_len,
        }
    }

    /// Configured tag length
    pub fn tag_len(&self) -> TagLen {
        self.tag_len
    }

    /// Encrypts `data` in place and writes the masked tag into `tag`.
    ///
    /// Generation-encryption per SP 800-38C Section 6.1.
    pub fn encrypt_in_place_detached(
        &self,
        nonce: &[u8],
        ad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), CcmError> {
        let params = self.validate(nonce, data.len(), tag.len())?;
        let m = params.tag_len().get();

        let mut t = [0u8; BLOCK_LEN];
        self.cbc_mac(&params, nonce, ad, data, &mut t);
        mask_tag(&self.cipher, nonce, &mut t);
        tag.copy_from_slice(&t[..m]);
        t.zeroize();

        apply_ctr(&self.cipher, nonce, data);
        Ok(())
    }

    /// Decrypts `data` in place and verifies `tag`.
    ///
    /// Decryption-verification per SP 800-38C Section 6.2. On tag mismatch the
    /// recovered plaintext is zeroized before [`CcmError::AuthenticationFailed`]
    /// is returned.
    pub fn decrypt_in_place_detached(
        &self,
        nonce: &[u8],
        ad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), CcmError> {
        if !self.open_in_place(nonce, ad, data, tag)? {
            data.zeroize();
            return Err(CcmError::AuthenticationFailed);
        }
        Ok(())
    }

    /// Decrypts `data` in place and reports whether `tag` verified.
    ///
    /// The plaintext is left in `data` either way.
    pub(crate) fn open_in_place(
        &self,
        nonce: &[u8],
        ad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<bool, CcmError> {
        let params = self.validate(nonce, data.len(), tag.len())?;
        let m = params.tag_len().get();

        apply_ctr(&self.cipher, nonce, data);

        let mut t = [0u8; BLOCK_LEN];
        self.cbc_mac(&params, nonce, ad, data, &mut t);
        mask_tag(&self.cipher, nonce, &mut t);
        let authentic = constant_time_eq(&t[..m], tag);
        t.zeroize();

        if !authentic {
            debug!("ccm: authentication failed");
        }
        Ok(authentic)
    }

    fn validate(
        &self,
        nonce: &[u8],
        payload_len: usize,
        tag_buf_len: usize,
    ) -> Result<CcmParams, CcmError> {
        let params = CcmParams::new(nonce.len(), self.tag_len)?;
        if tag_buf_len != self.tag_len.get() {
            return Err(CcmError::TagBufferSize {
                expected: self.tag_len.get(),
                actual: tag_buf_len,
            });
        }
        params.check_payload_len(payload_len)?;
        Ok(params)
    }

    /// CBC-MAC over the formatted blocks B0 || ad blocks || payload blocks.
    ///
    /// Writes the full final chaining value to `out`; the caller truncates.
    fn cbc_mac(&self, params: &CcmParams, nonce: &[u8], ad: &[u8], payload: &[u8], out: &mut Block) {
        let l = params.length_field_len();

        // B0 = flags || N || Q, SP 800-38C A.2.1
        let mut b0 = [0u8; BLOCK_LEN];
        b0[0] = params.tag_len().flags_bits() | (l as u8 - 1);
        if !ad.is_empty() {
            b0[0] |= ADATA_FLAG;
        }
        b0[1..1 + nonce.len()].copy_from_slice(nonce);
        b0[1 + nonce.len()..].copy_from_slice(&(payload.len() as u64).to_be_bytes()[8 - l..]);

        let mut mac = CbcMac::new();
        mac.update(&self.cipher, &b0);
        b0.zeroize();

        // a(0) || A, zero padded, SP 800-38C A.2.2
        if let Some(prefix) = AdLenPrefix::for_len(ad.len()) {
            let mut encoded = [0u8; AD_LEN_PREFIX_MAX];
            let width = prefix.encode(&mut encoded);
            mac.update(&self.cipher, &encoded[..width]);
            mac.update(&self.cipher, ad);
            mac.pad(&self.cipher);
        }

        // P, zero padded, SP 800-38C A.2.3
        mac.update(&self.cipher, payload);
        mac.pad(&self.cipher);

        out.copy_from_slice(&mac.x);
    }
}

/// Applies the CCM* encryption-only transform (M = 0) to `data` in place.
///
/// XORs the CTR keystream E(A_1), E(A_2), ... into `data`, without any
/// authentication. Encrypting and decrypting are the same operation.
pub fn apply_keystream(key: &Key, nonce: &[u8], data: &mut [u8]) -> Result<(), CcmError> {
    let l = params::length_field_len(nonce.len())?;
    params::check_payload_len(l, data.len())?;

    let cipher = Aes128::new(key);
    apply_ctr(&cipher, nonce, data);
    Ok(())
}

/// Counter block A_i = flags || N || i, SP 800-38C A.3
fn counter_block(out: &mut Block, nonce: &[u8], counter: u64) {
    let l = BLOCK_LEN - 1 - nonce.len();
    out[0] = (l - 1) as u8;
    out[1..1 + nonce.len()].copy_from_slice(nonce);
    out[1 + nonce.len()..].copy_from_slice(&counter.to_be_bytes()[8 - l..]);
}

/// XORs E(A_1), E(A_2), ... into `data`, truncating the last keystream block
fn apply_ctr(cipher: &Aes128, nonce: &[u8], data: &mut [u8]) {
    let mut keystream = [0u8; BLOCK_LEN];
    for (i, chunk) in data.chunks_mut(BLOCK_LEN).enumerate() {
        counter_block(&mut keystream, nonce, i as u64 + 1);
        cipher.encrypt_block(&mut keystream);
        xor_in_place(chunk, &keystream);
    }
    keystream.zeroize();
}

/// Masks a raw CBC-MAC value with E(A_0)
fn mask_tag(cipher: &Aes128, nonce: &[u8], t: &mut Block) {
    let mut s0 = [0u8; BLOCK_LEN];
    counter_block(&mut s0, nonce, 0);
    cipher.encrypt_block(&mut s0);
    xor_in_place(t, &s0);
    s0.zeroize();
}

/// CBC-MAC chaining state with a one-block input buffer.
#[derive(Zeroize, ZeroizeOnDrop)]
struct CbcMac {
    // Chaining value Y_i
    x: Block,
    // Pending input, always zero past buffer_len
    buffer: Block,
    buffer_len: usize,
}

impl CbcMac {
    fn new() -> Self {
        Self {
            x: [0u8; BLOCK_LEN],
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
        }
    }

    fn update(&mut self, cipher: &Aes128, data: &[u8]) {
        let mut offset = 0;

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                self.chain(cipher);
            }
        }

        // Process full blocks
        while offset + BLOCK_LEN <= data.len() {
            self.buffer.copy_from_slice(&data[offset..offset + BLOCK_LEN]);
            self.chain(cipher);
            offset += BLOCK_LEN;
        }

        // Buffer remaining
        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Completes a partial block with zeros
    fn pad(&mut self, cipher: &Aes128) {
        if self.buffer_len > 0 {
            self.buffer[self.buffer_len..].fill(0);
            self.chain(cipher);
        }
    }

    /// Y_i = E(Y_{i-1} xor B_i)
    fn chain(&mut self, cipher: &Aes128) {
        xor_in_place(&mut self.x, &self.buffer);
        cipher.encrypt_block(&mut self.x);
        self.buffer.zeroize();
        self.buffer_len = 0;
    }
}
