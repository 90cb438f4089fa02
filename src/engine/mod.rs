//! Algorithm-generic digest machinery.
//!
//! SHA-1 and SHA-256 share the whole Merkle–Damgård skeleton: pad the
//! message, cut it into 64-byte blocks, expand each block into a message
//! schedule, run the round function over the schedule, fold the working
//! state back into the running accumulator, and serialize the
//! accumulator once the last block is done. This module owns that
//! skeleton exactly once.
//!
//! Each algorithm plugs in through the [`Algorithm`] trait: its
//! published initial hash values, its schedule expansion, and its round
//! function. Everything observable goes through the [`RoundSink`]
//! observer defined in [`observer`].

pub mod observer;

pub use observer::{NullSink, Recorder, RoundSink, RoundSnapshot, WriteSink};

use std::fmt::{Display, Formatter};

/// Errors that can occur before a digest computation starts.
///
/// Once padding has succeeded the rest of the computation is pure
/// modular arithmetic and cannot fail; no snapshot and no digest is
/// ever emitted for an input that errors here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// Input bytes are not valid UTF-8 text.
    InvalidEncoding,
    /// Input bit length does not fit the 64-bit length field of the
    /// padding rule.
    MessageTooLong,
}

impl Display for DigestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestError::InvalidEncoding => write!(f, "input is not valid UTF-8"),
            DigestError::MessageTooLong => {
                write!(f, "input bit length exceeds the 64-bit length field")
            }
        }
    }
}

impl std::error::Error for DigestError {}

/// A hash function pluggable into the generic digest driver.
///
/// `STATE` is the number of 32-bit working registers (5 for SHA-1, 8
/// for SHA-256); `SCHED` is the message-schedule length, which is also
/// the round count per block (80 for SHA-1, 64 for SHA-256).
pub trait Algorithm<const STATE: usize, const SCHED: usize> {
    /// Published initial hash values (FIPS 180-4 §5.3).
    const INIT: [u32; STATE];

    /// Expands a 64-byte block into the full message schedule.
    ///
    /// The first 16 words are the big-endian 32-bit interpretation of
    /// the block; the remainder follow the algorithm's recurrence.
    fn expand(block: &[u8; 64]) -> [u32; SCHED];

    /// Applies one compression round to the working state.
    ///
    /// `round` is the 0-based round index, `w` the schedule word for
    /// that round.
    fn round(state: &mut [u32; STATE], w: u32, round: usize);
}

/// Applies the Merkle–Damgård padding rule to a message.
///
/// Appends the `0x80` marker byte, zero-fills until the length is 56
/// modulo 64, then appends the original length **in bits** as a
/// big-endian 64-bit integer. The result is always a positive multiple
/// of 64 bytes, at least `message.len() + 9` bytes long.
///
/// # Errors
///
/// Returns [`DigestError::MessageTooLong`] if the bit length would not
/// fit in 64 bits. Unreachable for realistic inputs, but the length
/// must never silently truncate.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, DigestError> {
    let bit_len = (message.len() as u64)
        .checked_mul(8)
        .ok_or(DigestError::MessageTooLong)?;

    let mut padded = Vec::with_capacity(message.len() + 72);
    padded.extend_from_slice(message);
    padded.push(0x80);

    while padded.len() % 64 != 56 {
        padded.push(0x00);
    }

    padded.extend_from_slice(&bit_len.to_be_bytes());

    Ok(padded)
}

/// Runs a full digest computation, reporting every round to `sink`.
///
/// Control flow: pad → split into 64-byte blocks → per block: expand
/// the schedule, initialize the working state from the accumulator, run
/// the rounds (emitting a snapshot after each), fold the working state
/// into the accumulator → serialize the accumulator to lowercase hex
/// and emit it through [`RoundSink::on_digest`].
///
/// Blocks are strictly sequential: each block's working state starts
/// from the accumulator the previous block left behind. Within a block
/// every round consumes the previous round's output. Snapshot round
/// indices are 1-based and restart at 1 for every block.
///
/// # Errors
///
/// Only [`pad`] can fail; on error the sink is never invoked.
pub fn digest<A, S, const STATE: usize, const SCHED: usize>(
    input: &[u8],
    sink: &mut S,
) -> Result<String, DigestError>
where
    A: Algorithm<STATE, SCHED>,
    S: RoundSink<STATE>,
{
    let padded = pad(input)?;
    let mut acc = A::INIT;

    for block in padded.chunks_exact(64) {
        let block: &[u8; 64] = block.try_into().unwrap();
        let w = A::expand(block);

        let mut state = acc;

        for (i, &word) in w.iter().enumerate() {
            A::round(&mut state, word, i);

            sink.on_round(&RoundSnapshot {
                round: i + 1,
                registers: state,
            });
        }

        for (h, s) in acc.iter_mut().zip(state.iter()) {
            *h = h.wrapping_add(*s);
        }
    }

    let hex = to_hex(&acc);
    sink.on_digest(&hex);

    Ok(hex)
}

/// Serializes the accumulator as lowercase hexadecimal.
///
/// Each 32-bit word becomes exactly 8 hex digits (leading zeros
/// preserved), concatenated in register order: 40 characters for SHA-1,
/// 64 for SHA-256.
pub fn to_hex<const STATE: usize>(acc: &[u32; STATE]) -> String {
    acc.iter().map(|word| format!("{word:08x}")).collect()
}
