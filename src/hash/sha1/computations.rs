//! SHA-1 round primitives.

pub use super::K1;

/// Choice function for rounds 0..20 (FIPS 180-4 §4.1.1).
#[inline(always)]
pub fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

/// Parity function for rounds 20..40 and 60..80.
#[inline(always)]
pub fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

/// Majority function for rounds 40..60.
#[inline(always)]
pub fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Selects the logical function value and round constant for `round`.
#[inline(always)]
pub fn f_k(round: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match round / 20 {
        0 => (ch(b, c, d), K1[0]),
        1 => (parity(b, c, d), K1[1]),
        2 => (maj(b, c, d), K1[2]),
        _ => (parity(b, c, d), K1[3]),
    }
}

/// Expands a 64-byte block into the 80-word message schedule.
///
/// Words 0..16 are the big-endian interpretation of the block; words
/// 16..80 follow `w[i] = rotl(w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16], 1)`.
pub fn expand(block: &[u8; 64]) -> [u32; 80] {
    let mut w = [0u32; 80];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)).take(16) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    w
}

/// One SHA-1 compression round (FIPS 180-4 §6.1.2).
///
/// Computes `temp = rotl(a, 5) + f + e + k + w` and shifts the
/// registers: `e = d, d = c, c = rotl(b, 30), b = a, a = temp`. All
/// additions wrap modulo 2³².
#[inline(always)]
pub fn round(state: &mut [u32; 5], w: u32, round: usize) {
    let [a, b, c, d, e] = *state;
    let (f, k) = f_k(round, b, c, d);

    let temp = a
        .rotate_left(5)
        .wrapping_add(f)
        .wrapping_add(e)
        .wrapping_add(k)
        .wrapping_add(w);

    *state = [temp, a, b.rotate_left(30), c, d];
}
