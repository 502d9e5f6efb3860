// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// RFC 3610 packet vectors, 13-byte nonces, 8 and 10 byte tags
//
// References:
// [1] RFC 3610: Counter with CBC-MAC (CCM), Section 8 - Test Vectors
//     https://datatracker.ietf.org/doc/html/rfc3610#section-8

use zigsec_util::{hex_to_array, hex_to_bytes};

use crate::{decrypt, encrypt};

struct TestCase {
    name: &'static str,
    key: &'static str,
    nonce: &'static str,
    ad: &'static str,
    payload: &'static str,
    tag_len: usize,
    expected: &'static str,
}

const TEST_CASES: &[TestCase] = &[
    TestCase {
        name: "RFC 3610 packet vector #1",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "00000003020100a0a1a2a3a4a5",
        ad: "0001020304050607",
        payload: "08090a0b0c0d0e0f101112131415161718191a1b1c1d1e",
        tag_len: 8,
        expected: "588c979a61c663d2f066d0c2c0f989806d5f6b61dac38417e8d12cfdf926e0",
    },
    TestCase {
        name: "RFC 3610 packet vector #2",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "00000004030201a0a1a2a3a4a5",
        ad: "0001020304050607",
        payload: "08090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        tag_len: 8,
        expected: "72c91a36e135f8cf291ca894085c87e3cc15c439c9e43a3ba091d56e10400916",
    },
    TestCase {
        name: "RFC 3610 packet vector #3",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "00000005040302a0a1a2a3a4a5",
        ad: "0001020304050607",
        payload: "08090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20",
        tag_len: 8,
        expected: "51b1e5f44a197d1da46b0f8e2d282ae871e838bb64da8596574adaa76fbd9fb0c5",
    },
    TestCase {
        name: "RFC 3610 packet vector #4",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "00000006050403a0a1a2a3a4a5",
        ad: "000102030405060708090a0b",
        payload: "0c0d0e0f101112131415161718191a1b1c1d1e",
        tag_len: 8,
        expected: "a28c6865939a9a79faaa5c4c2a9d4a91cdac8c96c861b9c9e61ef1",
    },
    TestCase {
        name: "RFC 3610 packet vector #5",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "00000007060504a0a1a2a3a4a5",
        ad: "000102030405060708090a0b",
        payload: "0c0d0e0f101112131415161718191a1b1c1d1e1f",
        tag_len: 8,
        expected: "dcf1fb7b5d9e23fb9d4e131253658ad86ebdca3e51e83f077d9c2d93",
    },
    TestCase {
        name: "RFC 3610 packet vector #6",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "00000008070605a0a1a2a3a4a5",
        ad: "000102030405060708090a0b",
        payload: "0c0d0e0f101112131415161718191a1b1c1d1e1f20",
        tag_len: 8,
        expected: "6fc1b011f006568b5171a42d953d469b2570a4bd87405a0443ac91cb94",
    },
    TestCase {
        name: "RFC 3610 packet vector #7",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "00000009080706a0a1a2a3a4a5",
        ad: "0001020304050607",
        payload: "08090a0b0c0d0e0f101112131415161718191a1b1c1d1e",
        tag_len: 10,
        expected: "0135d1b2c95f41d5d1d4fec185d166b8094e999dfed96c048c56602c97acbb7490",
    },
    TestCase {
        name: "RFC 3610 packet vector #8",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "0000000a090807a0a1a2a3a4a5",
        ad: "0001020304050607",
        payload: "08090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        tag_len: 10,
        expected: "7b75399ac0831dd2f0bbd75879a2fd8f6cae6b6cd9b7db24c17b4433f434963f34b4",
    },
    TestCase {
        name: "RFC 3610 packet vector #9",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "0000000b0a0908a0a1a2a3a4a5",
        ad: "0001020304050607",
        payload: "08090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20",
        tag_len: 10,
        expected: "82531a60cc24945a4b8279181ab5c84df21ce7f9b73f42e197ea9c07e56b5eb17e5f4e",
    },
    TestCase {
        name: "RFC 3610 packet vector #10",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "0000000c0b0a09a0a1a2a3a4a5",
        ad: "000102030405060708090a0b",
        payload: "0c0d0e0f101112131415161718191a1b1c1d1e",
        tag_len: 10,
        expected: "07342594157785152b074098330abb141b947b566aa9406b4d999988dd",
    },
    TestCase {
        name: "RFC 3610 packet vector #11",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "0000000d0c0b0aa0a1a2a3a4a5",
        ad: "000102030405060708090a0b",
        payload: "0c0d0e0f101112131415161718191a1b1c1d1e1f",
        tag_len: 10,
        expected: "676bb20380b0e301e8ab79590a396da78b834934f53aa2e9107a8b6c022c",
    },
    TestCase {
        name: "RFC 3610 packet vector #12",
        key: "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
        nonce: "0000000e0d0c0ba0a1a2a3a4a5",
        ad: "000102030405060708090a0b",
        payload: "0c0d0e0f101112131415161718191a1b1c1d1e1f20",
        tag_len: 10,
        expected: "c0ffa0d6f05bdb67f24d43a4338d2aa4bed7b20e43cd1aa31662e7ad65d6db",
    },
    TestCase {
        name: "RFC 3610 packet vector #13",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "00412b4ea9cdbe3c9696766cfa",
        ad: "0be1a88bace018b1",
        payload: "08e8cf97d820ea258460e96ad9cf5289054d895ceac47c",
        tag_len: 8,
        expected: "4cb97f86a2a4689a877947ab8091ef5386a6ffbdd080f8e78cf7cb0cddd7b3",
    },
    TestCase {
        name: "RFC 3610 packet vector #14",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "0033568ef7b2633c9696766cfa",
        ad: "63018f76dc8a1bcb",
        payload: "9020ea6f91bdd85afa0039ba4baff9bfb79c7028949cd0ec",
        tag_len: 8,
        expected: "4ccb1e7ca981befaa0726c55d378061298c85c92814abc33c52ee81d7d77c08a",
    },
    TestCase {
        name: "RFC 3610 packet vector #15",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "00103fe41336713c9696766cfa",
        ad: "aa6cfa36cae86b40",
        payload: "b916e0eacc1c00d7dcec68ec0b3bbb1a02de8a2d1aa346132e",
        tag_len: 8,
        expected: "b1d23a2220ddc0ac900d9aa03c61fcf4a559a4417767089708a776796edb723506",
    },
    TestCase {
        name: "RFC 3610 packet vector #16",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "00764c63b8058e3c9696766cfa",
        ad: "d0d0735c531e1becf049c244",
        payload: "12daac5630efa5396f770ce1a66b21f7b2101c",
        tag_len: 8,
        expected: "14d253c3967b70609b7cbb7c499160283245269a6f49975bcadeaf",
    },
    TestCase {
        name: "RFC 3610 packet vector #17",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "00f8b678094e3b3c9696766cfa",
        ad: "77b60f011c03e1525899bcae",
        payload: "e88b6a46c78d63e52eb8c546efb5de6f75e9cc0d",
        tag_len: 8,
        expected: "5545ff1a085ee2efbf52b2e04bee1e2336c73e3f762c0c7744fe7e3c",
    },
    TestCase {
        name: "RFC 3610 packet vector #18",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "00d560912d3f703c9696766cfa",
        ad: "cd9044d2b71fdb8120ea60c0",
        payload: "6435acbafb11a82e2f071d7ca4a5ebd93a803ba87f",
        tag_len: 8,
        expected: "009769ecabdf48625594c59251e6035722675e04c847099e5ae0704551",
    },
    TestCase {
        name: "RFC 3610 packet vector #19",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "0042fff8f1951c3c9696766cfa",
        ad: "d85bc7e69f944fb8",
        payload: "8a19b950bcf71a018e5e6701c91787659809d67dbedd18",
        tag_len: 10,
        expected: "bc218daa947427b6db386a99ac1aef23ade0b52939cb6a637cf9bec2408897c6ba",
    },
    TestCase {
        name: "RFC 3610 packet vector #20",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "00920f40e56cdc3c9696766cfa",
        ad: "74a0ebc9069f5b37",
        payload: "1761433c37c5a35fc1f39f406302eb907c6163be38c98437",
        tag_len: 10,
        expected: "5810e6fd25874022e80361a478e3e9cf484ab04f447efff6f0a477cc2fc9bf548944",
    },
    TestCase {
        name: "RFC 3610 packet vector #21",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "0027ca0c7120bc3c9696766cfa",
        ad: "44a3aa3aae6475ca",
        payload: "a434a8e58500c6e41530538862d686ea9e81301b5ae4226bfa",
        tag_len: 10,
        expected: "f2beed7bc5098e83feb5b31608f8e29c38819a89c8e776f1544d4151a4ed3a8b87b9ce",
    },
    TestCase {
        name: "RFC 3610 packet vector #22",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "005b8ccbcd9af83c9696766cfa",
        ad: "ec46bb63b02520c33c49fd70",
        payload: "b96b49e21d621741632875db7f6c9243d2d7c2",
        tag_len: 10,
        expected: "31d750a09da3ed7fddd49a2032aabf17ec8ebf7d22c8088c666be5c197",
    },
    TestCase {
        name: "RFC 3610 packet vector #23",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "003ebe94044b9a3c9696766cfa",
        ad: "47a65ac78b3d594227e85e71",
        payload: "e2fcfbb880442c731bf95167c8ffd7895e337076",
        tag_len: 10,
        expected: "e882f1dbd38ce3eda7c23f04dd65071eb41342acdf7e00dccec7ae52987d",
    },
    TestCase {
        name: "RFC 3610 packet vector #24",
        key: "d7828d13b2b0bdc325a76236df93cc6b",
        nonce: "008d493b30ae8b3c9696766cfa",
        ad: "6e37a6ef546d955d34ab6059",
        payload: "abf21c0b02feb88f856df4a37381bce3cc128517d4",
        tag_len: 10,
        expected: "f32905b88a641b04b9c9ffb58cc390900f3da12ab16dce9e82efa16da62059",
    },
];

#[test]
fn test_rfc3610_encrypt() {
    for tc in TEST_CASES {
        let key: [u8; 16] = hex_to_array(tc.key);
        let nonce = hex_to_bytes(tc.nonce);
        let ad = hex_to_bytes(tc.ad);
        let payload = hex_to_bytes(tc.payload);
        let expected = hex_to_bytes(tc.expected);

        let sealed = encrypt(&key, &nonce, &ad, &payload, tc.tag_len)
            .unwrap_or_else(|e| panic!("{}: encrypt failed: {}", tc.name, e));

        assert_eq!(sealed, expected, "{}: ciphertext mismatch", tc.name);
    }
}

#[test]
fn test_rfc3610_decrypt() {
    for tc in TEST_CASES {
        let key: [u8; 16] = hex_to_array(tc.key);
        let nonce = hex_to_bytes(tc.nonce);
        let ad = hex_to_bytes(tc.ad);
        let payload = hex_to_bytes(tc.payload);
        let sealed = hex_to_bytes(tc.expected);

        let opened = decrypt(&key, &nonce, &ad, &sealed, tc.tag_len)
            .unwrap_or_else(|e| panic!("{}: decrypt failed: {}", tc.name, e));

        assert_eq!(opened, payload, "{}: plaintext mismatch", tc.name);
    }
}
