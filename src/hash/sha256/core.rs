//! SHA-256 entry points.

use super::H256_INIT;
use super::computations;
use crate::engine::{self, Algorithm, DigestError, NullSink, RoundSink};

/// The SHA-256 algorithm, pluggable into the generic digest driver.
///
/// Eight 32-bit working registers, a 64-word schedule, 64 rounds per
/// block.
pub struct Sha256;

impl Algorithm<8, 64> for Sha256 {
    const INIT: [u32; 8] = H256_INIT;

    fn expand(block: &[u8; 64]) -> [u32; 64] {
        computations::expand(block)
    }

    fn round(state: &mut [u32; 8], w: u32, round: usize) {
        computations::round(state, w, round);
    }
}

/// Computes the SHA-256 digest of `input` as 64 lowercase hex
/// characters.
///
/// # Errors
///
/// [`DigestError::MessageTooLong`] if the input's bit length does not
/// fit in 64 bits.
pub fn sha256(input: &[u8]) -> Result<String, DigestError> {
    engine::digest::<Sha256, _, 8, 64>(input, &mut NullSink)
}

/// Computes the SHA-256 digest of `input`, reporting every round.
///
/// The sink receives exactly 64 snapshots per 64-byte padded block, in
/// round order, then the final digest once. The returned string equals
/// the digest the sink observed.
pub fn sha256_showcase<S: RoundSink<8>>(input: &str, sink: &mut S) -> Result<String, DigestError> {
    engine::digest::<Sha256, _, 8, 64>(input.as_bytes(), sink)
}

/// Like [`sha256_showcase`], over raw bytes.
pub fn sha256_showcase_bytes<S: RoundSink<8>>(
    input: &[u8],
    sink: &mut S,
) -> Result<String, DigestError> {
    engine::digest::<Sha256, _, 8, 64>(input, sink)
}

/// Like [`sha256_showcase`], over bytes that are *claimed* to be text.
///
/// Validates the bytes as UTF-8 before any padding or emission.
///
/// # Errors
///
/// [`DigestError::InvalidEncoding`] on malformed UTF-8; the sink is
/// never invoked in that case.
pub fn sha256_showcase_utf8<S: RoundSink<8>>(
    input: &[u8],
    sink: &mut S,
) -> Result<String, DigestError> {
    let text = std::str::from_utf8(input).map_err(|_| DigestError::InvalidEncoding)?;

    sha256_showcase(text, sink)
}
