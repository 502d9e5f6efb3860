// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128 key expansion and forward cipher per FIPS-197 Sections 5.1 and 5.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, KEY_LEN, RCON, ROUNDS, SBOX};
use crate::{Block, Key};

/// Words per key (Nk)
const NK: usize = KEY_LEN / 4;

/// AES-128 keyed forward cipher.
///
/// Holds the expanded key schedule (Nr + 1 round keys), zeroized on drop.
/// The state is column-major exactly as in FIPS-197 Section 3.4: input byte
/// `i` lands at row `i % 4`, column `i / 4`, so a block is used as-is.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: [[u8; BLOCK_LEN]; ROUNDS + 1],
}

impl core::fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aes128 {{ [protected] }}")
    }
}

impl Aes128 {
    /// Expand `key` into the round key schedule
    pub fn new(key: &Key) -> Self {
        let mut cipher = Self {
            round_keys: [[0u8; BLOCK_LEN]; ROUNDS + 1],
        };
        cipher.expand_key(key);
        cipher
    }

    /// KeyExpansion per FIPS-197 Section 5.2
    fn expand_key(&mut self, key: &Key) {
        self.round_keys[0].copy_from_slice(key);

        // w[i] for i in Nk..4*(Nr+1), one round key = four words
        let mut temp = [0u8; 4];
        for i in NK..4 * (ROUNDS + 1) {
            let (prev_round, prev_word) = ((i - 1) / 4, (i - 1) % 4);
            temp.copy_from_slice(&self.round_keys[prev_round][prev_word * 4..prev_word * 4 + 4]);

            if i % NK == 0 {
                // SubWord(RotWord(temp)) xor Rcon[i/Nk]
                temp.rotate_left(1);
                for byte in temp.iter_mut() {
                    *byte = SBOX[*byte as usize];
                }
                temp[0] ^= RCON[i / NK - 1];
            }

            let (round, word) = (i / 4, i % 4);
            for k in 0..4 {
                // w[i - Nk] lives one round key back, same word slot
                let back = self.round_keys[round - 1][word * 4 + k];
                self.round_keys[round][word * 4 + k] = back ^ temp[k];
            }
        }

        temp.zeroize();
    }

    /// Returns round key `round` (test only)
    #[cfg(test)]
    pub(crate) fn round_key(&self, round: usize) -> &[u8; BLOCK_LEN] {
        &self.round_keys[round]
    }

    /// Cipher per FIPS-197 Section 5.1, in place
    pub fn encrypt_block(&self, state: &mut Block) {
        add_round_key(state, &self.round_keys[0]);

        for round_key in &self.round_keys[1..ROUNDS] {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, round_key);
        }

        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, &self.round_keys[ROUNDS]);
    }

    /// Cipher per FIPS-197 Section 5.1, returning a new block
    pub fn encrypt(&self, block: &Block) -> Block {
        let mut state = *block;
        self.encrypt_block(&mut state);
        state
    }
}

/// AddRoundKey per FIPS-197 Section 5.1.4
#[inline(always)]
fn add_round_key(state: &mut Block, round_key: &[u8; BLOCK_LEN]) {
    for (s, k) in state.iter_mut().zip(round_key.iter()) {
        *s ^= *k;
    }
}

/// SubBytes per FIPS-197 Section 5.1.1
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows per FIPS-197 Section 5.1.2
///
/// Row r is rotated left by r columns. With column-major layout, row r is
/// the byte sequence state[r], state[r + 4], state[r + 8], state[r + 12].
#[inline(always)]
pub(crate) fn shift_rows(state: &mut Block) {
    // Row 1: rotate left by one
    let t = state[1];
    state[1] = state[5];
    state[5] = state[9];
    state[9] = state[13];
    state[13] = t;

    // Row 2: rotate left by two (two swaps)
    state.swap(2, 10);
    state.swap(6, 14);

    // Row 3: rotate left by three == rotate right by one
    let t = state[15];
    state[15] = state[11];
    state[11] = state[7];
    state[7] = state[3];
    state[3] = t;
}

/// Multiplication by x in GF(2^8), without a data-dependent branch
#[inline(always)]
fn xtime(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7) * 0x1b)
}

/// MixColumns per FIPS-197 Section 5.1.3
#[inline(always)]
pub(crate) fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (column[0], column[1], column[2], column[3]);
        let all = a0 ^ a1 ^ a2 ^ a3;

        // s'_r = s_r ^ all ^ 2 * (s_r ^ s_{r+1})
        column[0] = a0 ^ all ^ xtime(a0 ^ a1);
        column[1] = a1 ^ all ^ xtime(a1 ^ a2);
        column[2] = a2 ^ all ^ xtime(a2 ^ a3);
        column[3] = a3 ^ all ^ xtime(a3 ^ a0);
    }
}
