// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte helpers shared by the zigsec primitives.
//!
//! Everything here works on caller-owned slices and never allocates, except
//! the hex fixture parser which is only compiled with the `test-utils` feature.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// Slices of different length compare unequal without inspecting contents;
/// for equal lengths the comparison time does not depend on where the
/// first difference occurs.
///
/// # Example
///
/// ```
/// use zigsec_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// XORs `src` into `dst`, byte by byte, over the shorter of the two lengths.
///
/// CBC-MAC chaining, CTR keystream application and HMAC pad derivation all
/// reduce to this operation.
///
/// # Example
///
/// ```
/// use zigsec_util::xor_in_place;
///
/// let mut block = [0x0fu8; 4];
/// xor_in_place(&mut block, &[0xf0, 0xf0, 0x0f, 0x00]);
/// assert_eq!(block, [0xff, 0xff, 0x00, 0x0f]);
/// ```
#[inline(always)]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use zigsec_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Attempts to split a slice from the end at the given size.
///
/// Returns `None` if `end_size > slice.len()`, otherwise `Some((left, right))`
/// where `right` holds exactly the last `end_size` elements. Used to peel a
/// trailing authentication tag off a received frame.
///
/// # Example
///
/// ```
/// use zigsec_util::try_split_from_end;
///
/// let data = [1, 2, 3, 4, 5];
///
/// let (body, tag) = try_split_from_end(&data, 2).unwrap();
/// assert_eq!(body, &[1, 2, 3]);
/// assert_eq!(tag, &[4, 5]);
///
/// assert!(try_split_from_end(&data, 10).is_none());
/// ```
#[inline(always)]
pub fn try_split_from_end<T>(slice: &[T], end_size: usize) -> Option<(&[T], &[T])> {
    let split_point = slice.len().checked_sub(end_size)?;
    Some(slice.split_at(split_point))
}

/// Parses a hexadecimal string into bytes.
///
/// ASCII whitespace is skipped, so long vectors can be wrapped across lines.
/// The remaining characters must be an even number of hex digits.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or an odd number of
/// digits. Only intended for test fixtures.
///
/// # Example
///
/// ```
/// use zigsec_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(hex_to_bytes("de ad\nbe ef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u8> = hex.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    digits
        .chunks_exact(2)
        .map(|pair| {
            let pair = core::str::from_utf8(pair).expect("non-ASCII hex input");
            u8::from_str_radix(pair, 16).expect("invalid hex digit")
        })
        .collect()
}

/// Parses a hexadecimal string into a fixed-size array.
///
/// # Panics
///
/// Panics on malformed hex or when the decoded length is not `N`.
///
/// # Example
///
/// ```
/// use zigsec_util::hex_to_array;
///
/// let key: [u8; 4] = hex_to_array("00010203");
/// assert_eq!(key, [0, 1, 2, 3]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_array<const N: usize>(hex: &str) -> [u8; N] {
    hex_to_bytes(hex)
        .try_into()
        .unwrap_or_else(|v: Vec<u8>| panic!("expected {} bytes, got {}", N, v.len()))
}
