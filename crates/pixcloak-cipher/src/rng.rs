// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Deterministic seeded shuffle shared by `permute` and `swap_pairs`.
//
// The permutation table is never stored, so encryption and decryption must
// derive it independently and get the same answer on every platform. The
// algorithm is therefore fixed here, step by step:
//
// 1. SplitMix64 generator, state initialised to the seed.
// 2. Unbiased bounded draw by rejection: with `threshold = 2^64 mod bound`
//    computed as `(2^64 - bound) % bound`, draw until `r >= threshold` and
//    return `r % bound`.
// 3. Fisher–Yates (Durstenfeld) over the identity `[0, n)`: for `i` from
//    `n - 1` down to `1`, swap entries `i` and `below(i + 1)`.

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 pseudo-random generator (Steele, Lea & Flood 2014).
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "bound must be non-zero");
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return r % bound;
            }
        }
    }
}

/// Seeded permutation of `0..len`.
pub fn permutation(seed: u64, len: usize) -> Vec<usize> {
    let mut table: Vec<usize> = (0..len).collect();
    let mut rng = SplitMix64::new(seed);
    for i in (1..len).rev() {
        let j = rng.below(i as u64 + 1) as usize;
        table.swap(i, j);
    }
    table
}

/// Inverse of a permutation table: `inverse[table[i]] == i`.
pub fn invert(table: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; table.len()];
    for (i, &target) in table.iter().enumerate() {
        inverse[target] = i;
    }
    inverse
}
