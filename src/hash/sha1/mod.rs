//! SHA-1 (FIPS 180-4) with per-round observability.
//!
//! SHA-1 is cryptographically broken for collision resistance; it is
//! included here because its 80-round, five-register structure is the
//! classic teaching example of the Merkle–Damgård compression loop.

pub mod computations;
pub mod core;

pub use self::core::{Sha1, sha1, sha1_showcase};

/// Published initial hash values (FIPS 180-4 §5.3.1).
pub const H1_INIT: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per 20-round quartile (FIPS 180-4 §4.2.1).
pub const K1: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
