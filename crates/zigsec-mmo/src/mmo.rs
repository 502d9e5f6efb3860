// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Matyas-Meyer-Oseas hash per ZigBee Specification Annex B.6

use log::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};
use zigsec_aes::{Aes128, Block, BLOCK_LEN};
use zigsec_util::xor_in_place;

use crate::{Digest, DIGEST_LEN};

/// Messages shorter than this many bytes (bit length < 2^16) use the
/// two-byte length trailer
const SHORT_FORM_LIMIT: u64 = 1 << 13;

/// 16-bit bit length
const SHORT_TRAILER_LEN: usize = 2;

/// 32-bit bit length followed by 16 zero bits
const LONG_TRAILER_LEN: usize = 6;

/// MMO streaming state.
///
/// Compression: H_0 = 0, H_j = E(H_{j-1}, M_j) xor M_j, the cipher keyed
/// with the previous chaining value.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct MmoState {
    // Chaining value H_j
    h: Block,

    // Input buffering
    buffer: Block,
    buffer_len: usize,
    total_len: u64,

    // Padded final block(s)
    tail: [u8; 2 * BLOCK_LEN],
}

impl MmoState {
    /// Creates a state with H_0 = 0^128
    pub fn new() -> Self {
        Self {
            h: [0u8; BLOCK_LEN],
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
            tail: [0u8; 2 * BLOCK_LEN],
        }
    }

    /// Clears all state back to H_0
    pub fn reset(&mut self) {
        self.zeroize();
    }

    /// Absorbs `data`
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                compress(&mut self.h, &self.buffer);
                self.buffer.zeroize();
                self.buffer_len = 0;
            }
        }

        // Process full blocks
        while offset + BLOCK_LEN <= data.len() {
            self.buffer.copy_from_slice(&data[offset..offset + BLOCK_LEN]);
            compress(&mut self.h, &self.buffer);
            self.buffer.zeroize();
            offset += BLOCK_LEN;
        }

        // Buffer remaining
        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Pads, compresses the tail and writes the digest.
    ///
    /// Padding per Annex B.6: a single 1 bit, zeros, then the message bit
    /// length, either as 16 bits (messages under 2^16 bits) or as 32 bits
    /// followed by 16 zero bits. The tail is one block when the trailer fits
    /// after the buffered bytes, two otherwise.
    pub fn finalize(&mut self, out: &mut Digest) {
        let bit_len = self.total_len.wrapping_mul(8);
        let short_form = self.total_len < SHORT_FORM_LIMIT;
        let trailer_len = if short_form {
            SHORT_TRAILER_LEN
        } else {
            LONG_TRAILER_LEN
        };

        let rem = self.buffer_len;
        let tail_len = (rem + 1 + trailer_len).next_multiple_of(BLOCK_LEN);
        trace!(
            "mmo: {} tail block(s), {}-byte length trailer",
            tail_len / BLOCK_LEN,
            trailer_len
        );

        self.tail.fill(0);
        self.tail[..rem].copy_from_slice(&self.buffer[..rem]);
        self.tail[rem] = 0x80;

        if short_form {
            self.tail[tail_len - 2..tail_len].copy_from_slice(&(bit_len as u16).to_be_bytes());
        } else {
            // Lengths past 2^32 bits wrap
            self.tail[tail_len - 6..tail_len - 2].copy_from_slice(&(bit_len as u32).to_be_bytes());
        }

        for start in (0..tail_len).step_by(BLOCK_LEN) {
            self.buffer.copy_from_slice(&self.tail[start..start + BLOCK_LEN]);
            compress(&mut self.h, &self.buffer);
        }

        out.copy_from_slice(&self.h[..DIGEST_LEN]);

        self.buffer.zeroize();
        self.tail.zeroize();
        self.buffer_len = 0;
    }
}

/// H = E(H, block) xor block
fn compress(h: &mut Block, block: &Block) {
    let cipher = Aes128::new(h);
    h.copy_from_slice(block);
    cipher.encrypt_block(h);
    xor_in_place(h, block);
}
