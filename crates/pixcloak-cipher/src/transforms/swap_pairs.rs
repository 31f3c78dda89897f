// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Swap disjoint pixel pairs chosen by the seeded shuffle. Self-inverse.
//
// The shuffled index list is cut into consecutive pairs
// `(t[0], t[1]), (t[2], t[3]), ...`; with an odd pixel count the last index
// stays where it is.

use pixcloak_core::types::CHANNELS;
use tracing::debug;

use super::TransformParams;
use crate::buffer::PixelBuffer;
use crate::rng;

/// Disjoint index pairs derived from `seed` for a buffer of `len` pixels.
pub fn pairs(seed: u64, len: usize) -> Vec<(usize, usize)> {
    rng::permutation(seed, len)
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

pub fn forward(buffer: &mut PixelBuffer, params: &TransformParams) {
    let pairs = pairs(params.key, buffer.pixel_count());
    debug!(pairs = pairs.len(), "Swapping pixel pairs");
    for (a, b) in pairs {
        swap_pixels(buffer, a, b);
    }
}

pub fn inverse(buffer: &mut PixelBuffer, params: &TransformParams) {
    forward(buffer, params);
}

fn swap_pixels(buffer: &mut PixelBuffer, a: usize, b: usize) {
    let pa = buffer.pixel(a);
    let pb = buffer.pixel(b);
    let bytes = buffer.as_bytes_mut();
    bytes[a * CHANNELS..(a + 1) * CHANNELS].copy_from_slice(&pb);
    bytes[b * CHANNELS..(b + 1) * CHANNELS].copy_from_slice(&pa);
}
