//! SHA-256 round primitives.

pub use super::K256;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expands a 64-byte block into the 64-word message schedule.
///
/// Words 0..16 are the big-endian interpretation of the block; words
/// 16..64 follow `w[i] = w[i-16] + σ₀(w[i-15]) + w[i-7] + σ₁(w[i-2])`,
/// wrapping modulo 2³².
pub fn expand(block: &[u8; 64]) -> [u32; 64] {
    let mut w = [0u32; 64];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)).take(16) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    for i in 16..64 {
        let s0 = small_sigma0(w[i - 15]);
        let s1 = small_sigma1(w[i - 2]);

        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    w
}

/// One SHA-256 compression round (FIPS 180-4 §6.2.2).
///
/// `t1 = h + Σ₁(e) + ch(e, f, g) + K[i] + w`, `t2 = Σ₀(a) + maj(a, b,
/// c)`, then the shift: `h = g, g = f, f = e, e = d + t1, d = c, c = b,
/// b = a, a = t1 + t2`. Note that `e` takes `d + t1`, not `d + t1 +
/// t2`; the latter is a common transcription mistake that yields a
/// non-standard digest.
#[inline(always)]
pub fn round(state: &mut [u32; 8], w: u32, round: usize) {
    let [a, b, c, d, e, f, g, h] = *state;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(K256[round])
        .wrapping_add(w);

    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    *state = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
}
