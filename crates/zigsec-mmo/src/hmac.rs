// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-MMO per ZigBee Specification Annex B.1.4 (FIPS-198 with B = 16)

use zeroize::{Zeroize, ZeroizeOnDrop};
use zigsec_aes::{Key, BLOCK_LEN};
use zigsec_util::xor_in_place;

use crate::mmo::MmoState;
use crate::{Digest, DIGEST_LEN};

const IPAD: [u8; BLOCK_LEN] = [0x36; BLOCK_LEN];
const OPAD: [u8; BLOCK_LEN] = [0x5c; BLOCK_LEN];

/// HMAC-MMO state with all intermediate buffers.
///
/// Keys are exactly one block long, so the key is never hashed or padded.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct HmacMmoState {
    /// Key1 = K xor ipad
    k_ipad: [u8; BLOCK_LEN],
    /// Key2 = K xor opad
    k_opad: [u8; BLOCK_LEN],
    /// Hash state for Hash1 = MMO(Key1 || M)
    inner: MmoState,
    /// Hash state for Hash2 = MMO(Key2 || Hash1)
    outer: MmoState,
    /// Hash1
    inner_hash: Digest,
}

impl HmacMmoState {
    pub fn new() -> Self {
        Self {
            k_ipad: [0u8; BLOCK_LEN],
            k_opad: [0u8; BLOCK_LEN],
            inner: MmoState::new(),
            outer: MmoState::new(),
            inner_hash: [0u8; DIGEST_LEN],
        }
    }

    /// MAC(K, M) = MMO(Key2 || MMO(Key1 || M))
    pub fn mac(&mut self, key: &Key, data: &[u8], out: &mut Digest) {
        // Initialize pads
        self.k_ipad.copy_from_slice(&IPAD);
        self.k_opad.copy_from_slice(&OPAD);
        xor_in_place(&mut self.k_ipad, key);
        xor_in_place(&mut self.k_opad, key);

        // Inner hash
        self.inner.reset();
        self.inner.update(&self.k_ipad);
        self.inner.update(data);
        self.inner.finalize(&mut self.inner_hash);

        // Outer hash
        self.outer.reset();
        self.outer.update(&self.k_opad);
        self.outer.update(&self.inner_hash);
        self.outer.finalize(out);

        // Zeroize HMAC intermediates immediately
        self.k_ipad.zeroize();
        self.k_opad.zeroize();
        self.inner_hash.zeroize();
        self.inner.reset();
        self.outer.reset();
    }
}
