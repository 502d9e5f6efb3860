// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Link key derivations per ZigBee Specification Section 4.5.3 and the
//! ZigBee Base Device Behavior install code procedure

use log::debug;
use zigsec_aes::Key;
use zigsec_mmo::{hmac_mmo, mmo_hash};

use crate::error::KeyError;

/// Install code lengths without the trailing CRC
pub const INSTALL_CODE_LENS: [usize; 4] = [6, 8, 12, 16];

/// CRC-16 appended to an install code
const INSTALL_CODE_CRC_LEN: usize = 2;

/// Key-transport key: HMAC-MMO(link_key, 0x00)
pub fn transport_key(link_key: &Key) -> Key {
    hmac_mmo(&[0x00], link_key)
}

/// Key-load key: HMAC-MMO(link_key, 0x02)
pub fn load_key(link_key: &Key) -> Key {
    hmac_mmo(&[0x02], link_key)
}

/// CRC-16/X-25 over `code`.
///
/// Reflected polynomial 0x1021 (0x8408), initial value 0xFFFF, final XOR
/// 0xFFFF.
pub fn install_code_crc(code: &[u8]) -> u16 {
    let mut crc = 0xffffu16;
    for &byte in code {
        crc ^= u16::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0x8408
            } else {
                crc >> 1
            };
        }
    }
    !crc
}

/// Derives the preconfigured link key from an install code.
///
/// `install_code` is the code followed by its CRC-16, least significant byte
/// first, exactly as printed on the device. The key is MMO(code || crc).
///
/// # Example
///
/// ```
/// use zigsec::link_key_from_install_code;
///
/// let install_code = [
///     0x83, 0xfe, 0xd3, 0x40, 0x7a, 0x93, 0x97, 0x23,
///     0xa5, 0xc6, 0x39, 0xb2, 0x69, 0x16, 0xd5, 0x05,
///     0xc3, 0xb5,
/// ];
///
/// let key = link_key_from_install_code(&install_code).unwrap();
/// assert_eq!(&key[..4], &[0x66, 0xb6, 0x90, 0x09]);
/// ```
pub fn link_key_from_install_code(install_code: &[u8]) -> Result<Key, KeyError> {
    let code_len = install_code.len().wrapping_sub(INSTALL_CODE_CRC_LEN);
    if install_code.len() < INSTALL_CODE_CRC_LEN || !INSTALL_CODE_LENS.contains(&code_len) {
        debug!("install code: rejected length {}", install_code.len());
        return Err(KeyError::InvalidInstallCodeLength(install_code.len()));
    }

    let (code, crc) = install_code.split_at(code_len);
    let received = u16::from_le_bytes([crc[0], crc[1]]);
    let computed = install_code_crc(code);
    if received != computed {
        debug!("install code: CRC mismatch");
        return Err(KeyError::InstallCodeCrcMismatch { computed, received });
    }

    Ok(mmo_hash(install_code))
}
