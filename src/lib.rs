//! Round-traced SHA-1 and SHA-256
//!
//! This crate implements the SHA-1 and SHA-256 cryptographic hash
//! functions as defined in FIPS 180-4, with one deliberate twist: the
//! full intermediate computation is observable. After every compression
//! round the engine hands the complete working-register state to a
//! caller-supplied sink, and the final hexadecimal digest is delivered
//! through the same channel.
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! intended use is studying or verifying the algorithms' internal
//! mechanics round by round, not high-throughput production hashing.
//! All components are dependency-free and explicit in their semantics.
//!
//! # Module overview
//!
//! - `engine`
//!   The algorithm-generic machinery: Merkle–Damgård padding, block
//!   iteration, the [`engine::Algorithm`] capability implemented by each
//!   hash function, the [`engine::RoundSink`] observer interface with
//!   its stock sinks, and the error type.
//!
//! - `hash`
//!   The two hash functions. Each algorithm module contributes its
//!   published constants, its message-schedule expansion, and its round
//!   function; the shared block/scheduler logic lives in `engine` and is
//!   never duplicated.
//!
//! # Design goals
//!
//! - No heap allocations inside the round loop
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics matching FIPS 180-4 bit for bit
//! - Zero coupling between the compression engine and any presentation
//!   technology: rendering is whatever the sink makes of the snapshots
//!
//! This crate is not intended to replace externally audited hashing
//! libraries; it is a small, controlled instrument for looking inside
//! the computation.

pub mod engine;
pub mod hash;
