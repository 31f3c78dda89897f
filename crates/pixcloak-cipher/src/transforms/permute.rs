// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shuffle pixel positions with a seeded permutation.
//
// Forward gathers `out[i] = in[table[i]]`; the inverse gathers through the
// inverted table. All four channels of a pixel move together.

use pixcloak_core::types::CHANNELS;
use tracing::debug;

use super::TransformParams;
use crate::buffer::PixelBuffer;
use crate::rng;

pub fn forward(buffer: &mut PixelBuffer, params: &TransformParams) {
    let table = rng::permutation(params.key, buffer.pixel_count());
    gather(buffer, &table);
}

pub fn inverse(buffer: &mut PixelBuffer, params: &TransformParams) {
    let table = rng::permutation(params.key, buffer.pixel_count());
    gather(buffer, &rng::invert(&table));
}

/// Rewrite `buffer` so pixel `i` becomes the old pixel `table[i]`.
fn gather(buffer: &mut PixelBuffer, table: &[usize]) {
    debug!(pixels = table.len(), "Permuting pixel positions");
    let src = buffer.as_bytes().to_vec();
    for (px, &from) in buffer.pixels_mut().zip(table) {
        let start = from * CHANNELS;
        px.copy_from_slice(&src[start..start + CHANNELS]);
    }
}
