//! Round observation interface and stock sinks.
//!
//! The compression engine knows nothing about rendering. It pushes one
//! [`RoundSnapshot`] per round and one final digest string into a
//! [`RoundSink`], synchronously, in order; what happens to them —
//! printing, collecting, discarding — is entirely the sink's business.

use std::io::Write;

/// Register state observed after a single compression round.
///
/// `registers` holds the working registers *after* the round's shift,
/// most significant register (A) first. `round` is 1-based within the
/// current block, so SHA-1 rounds run 1..=80 and SHA-256 rounds
/// 1..=64, restarting for every block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSnapshot<const STATE: usize> {
    /// 1-based round index within the current block.
    pub round: usize,
    /// Working registers after the shift, A first.
    pub registers: [u32; STATE],
}

/// Receiver for the engine's observable output.
///
/// `on_round` is invoked once per round in strictly increasing round
/// order, synchronously from inside the compression loop; `on_digest`
/// exactly once, after the last block's fold, with the final lowercase
/// hex digest. A slow sink slows the engine down but never corrupts
/// it — the engine holds no shared state across the call.
pub trait RoundSink<const STATE: usize> {
    fn on_round(&mut self, snapshot: &RoundSnapshot<STATE>);
    fn on_digest(&mut self, digest: &str);
}

/// Discards everything. Backs the digest-only convenience functions.
pub struct NullSink;

impl<const STATE: usize> RoundSink<STATE> for NullSink {
    fn on_round(&mut self, _snapshot: &RoundSnapshot<STATE>) {}

    fn on_digest(&mut self, _digest: &str) {}
}

/// Collects every snapshot and the final digest.
///
/// The primary instrument for inspecting a computation after the fact:
/// a UI can replay `rounds` at its own pace, and tests compare whole
/// recordings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recorder<const STATE: usize> {
    /// All snapshots, in emission order, across all blocks.
    pub rounds: Vec<RoundSnapshot<STATE>>,
    /// The final digest, `None` until `on_digest` fires.
    pub digest: Option<String>,
}

impl<const STATE: usize> Recorder<STATE> {
    pub fn new() -> Self {
        Self {
            rounds: Vec::new(),
            digest: None,
        }
    }
}

impl<const STATE: usize> RoundSink<STATE> for Recorder<STATE> {
    fn on_round(&mut self, snapshot: &RoundSnapshot<STATE>) {
        self.rounds.push(*snapshot);
    }

    fn on_digest(&mut self, digest: &str) {
        self.digest = Some(digest.to_owned());
    }
}

/// Formats each round as text into any writer.
///
/// Output format, one stanza per round:
///
/// ```text
/// Round 1:
/// A = 0116fc33, B = 67452301, C = 7bf36ae2, D = 98badcfe, E = 10325476
/// ```
///
/// followed by a blank line, and a single `Final <label> Hash: <hex>`
/// line once the digest is ready. Registers are labeled `A`, `B`, …
/// in order. Write errors are ignored; a broken pipe must not abort a
/// computation that is already past the point of failure.
pub struct WriteSink<W> {
    writer: W,
    label: &'static str,
}

impl<W: Write> WriteSink<W> {
    /// Creates a sink writing to `writer`, using `label` (for example
    /// `"SHA-1"`) in the final digest line.
    pub fn new(writer: W, label: &'static str) -> Self {
        Self { writer, label }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write, const STATE: usize> RoundSink<STATE> for WriteSink<W> {
    fn on_round(&mut self, snapshot: &RoundSnapshot<STATE>) {
        let _ = writeln!(self.writer, "Round {}:", snapshot.round);

        for (i, reg) in snapshot.registers.iter().enumerate() {
            let label = (b'A' + i as u8) as char;
            let sep = if i + 1 == STATE { "\n" } else { ", " };
            let _ = write!(self.writer, "{label} = {reg:08x}{sep}");
        }

        let _ = writeln!(self.writer);
    }

    fn on_digest(&mut self, digest: &str) {
        let _ = writeln!(self.writer, "Final {} Hash: {}", self.label, digest);
    }
}
