//! Hash algorithms exposed by the crate.
//!
//! Both SHA-1 and SHA-256 are pure-Rust implementations of FIPS 180-4,
//! driven by the shared engine in [`crate::engine`].

pub mod sha1;
pub mod sha256;

/// Re-exports of the per-algorithm convenience functions.
pub use self::sha1::core::{sha1, sha1_showcase};
pub use self::sha256::core::{sha256, sha256_showcase};
