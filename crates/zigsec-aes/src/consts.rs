// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// AES block size in bytes
pub const BLOCK_LEN: usize = 16;

/// AES-128 key size in bytes
pub const KEY_LEN: usize = 16;

/// Number of rounds for AES-128 (Nr)
pub const ROUNDS: usize = 10;

/// Round constants Rcon[i] per FIPS-197 Section 5.2 (leading byte only)
pub(crate) const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Forward S-box per FIPS-197 Section 5.1.1
///
/// Built at compile time from the multiplicative inverse in GF(2^8) followed
/// by the affine transformation, rather than transcribed by hand.
pub(crate) const SBOX: [u8; 256] = build_sbox();

/// Multiplication in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1
pub(crate) const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse in GF(2^8) as x^254; maps 0 to 0
const fn gf_inv(x: u8) -> u8 {
    let mut result = 1u8;
    let mut base = x;
    let mut exp = 254u32;
    while exp > 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exp >>= 1;
    }
    result
}

const fn build_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = gf_inv(i as u8);
        sbox[i] = b
            ^ b.rotate_left(1)
            ^ b.rotate_left(2)
            ^ b.rotate_left(3)
            ^ b.rotate_left(4)
            ^ 0x63;
        i += 1;
    }
    sbox
}
