use tracehash::hash::sha256::sha256;

use sha2::{Digest, Sha256 as RefSha256};

fn expect_sha256_eq(input: &[u8], expected: &str) {
    let got = sha256(input).unwrap();

    assert_eq!(
        got, expected,
        "Digest mismatch for input {:?}\nExpected {}\nGot      {}",
        input, expected, got,
    );
}

fn reference_sha256(input: &[u8]) -> String {
    let mut hasher = RefSha256::new();
    hasher.update(input);

    hex::encode(hasher.finalize())
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn sha256_abc_vector() {
    expect_sha256_eq(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn sha256_two_block_vector() {
    // 56 bytes, so the padding spills into a second block.
    expect_sha256_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_million_a_vector() {
    let input = vec![b'a'; 1_000_000];

    expect_sha256_eq(
        &input,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

// -------------------------------------------------------
// 2. CROSS-CHECKS AGAINST THE REFERENCE CRATE
// -------------------------------------------------------

#[test]
fn sha256_matches_reference_across_lengths() {
    // Every length from empty up to three full blocks, so both padding
    // branches and multi-block chaining get exercised.
    let bytes: Vec<u8> = (0..=u8::MAX).collect();

    for len in 0..=192 {
        let input = &bytes[..len.min(bytes.len())];

        assert_eq!(
            sha256(input).unwrap(),
            reference_sha256(input),
            "length {len}",
        );
    }
}

#[test]
fn sha256_matches_reference_on_text() {
    let input = "The quick brown fox jumps over the lazy dog".as_bytes();

    assert_eq!(sha256(input).unwrap(), reference_sha256(input));
}
