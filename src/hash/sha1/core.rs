//! SHA-1 entry points.
//!
//! `sha1` computes a plain digest; the `showcase` variants additionally
//! report every compression round to a caller-supplied sink, the way
//! the algorithm is usually walked through on paper.

use super::H1_INIT;
use super::computations;
use crate::engine::{self, Algorithm, DigestError, NullSink, RoundSink};

/// The SHA-1 algorithm, pluggable into the generic digest driver.
///
/// Five 32-bit working registers, an 80-word schedule, 80 rounds per
/// block.
pub struct Sha1;

impl Algorithm<5, 80> for Sha1 {
    const INIT: [u32; 5] = H1_INIT;

    fn expand(block: &[u8; 64]) -> [u32; 80] {
        computations::expand(block)
    }

    fn round(state: &mut [u32; 5], w: u32, round: usize) {
        computations::round(state, w, round);
    }
}

/// Computes the SHA-1 digest of `input` as 40 lowercase hex characters.
///
/// # Errors
///
/// [`DigestError::MessageTooLong`] if the input's bit length does not
/// fit in 64 bits.
pub fn sha1(input: &[u8]) -> Result<String, DigestError> {
    engine::digest::<Sha1, _, 5, 80>(input, &mut NullSink)
}

/// Computes the SHA-1 digest of `input`, reporting every round.
///
/// The sink receives exactly 80 snapshots per 64-byte padded block, in
/// round order, then the final digest once. The returned string equals
/// the digest the sink observed.
///
/// # Example
///
/// ```rust
/// use tracehash::engine::Recorder;
/// use tracehash::hash::sha1_showcase;
///
/// let mut rec = Recorder::<5>::new();
/// let digest = sha1_showcase("abc", &mut rec).unwrap();
///
/// assert_eq!(rec.rounds.len(), 80);
/// assert_eq!(rec.digest.as_deref(), Some(digest.as_str()));
/// ```
pub fn sha1_showcase<S: RoundSink<5>>(input: &str, sink: &mut S) -> Result<String, DigestError> {
    engine::digest::<Sha1, _, 5, 80>(input.as_bytes(), sink)
}

/// Like [`sha1_showcase`], over raw bytes.
pub fn sha1_showcase_bytes<S: RoundSink<5>>(
    input: &[u8],
    sink: &mut S,
) -> Result<String, DigestError> {
    engine::digest::<Sha1, _, 5, 80>(input, sink)
}

/// Like [`sha1_showcase`], over bytes that are *claimed* to be text.
///
/// Validates the bytes as UTF-8 before any padding or emission.
///
/// # Errors
///
/// [`DigestError::InvalidEncoding`] on malformed UTF-8; the sink is
/// never invoked in that case.
pub fn sha1_showcase_utf8<S: RoundSink<5>>(
    input: &[u8],
    sink: &mut S,
) -> Result<String, DigestError> {
    let text = std::str::from_utf8(input).map_err(|_| DigestError::InvalidEncoding)?;

    sha1_showcase(text, sink)
}
