// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reorder the channel axis. Values are only relabelled, never changed.

use pixcloak_core::types::ChannelOrder;

use super::TransformParams;
use crate::buffer::PixelBuffer;

pub fn forward(buffer: &mut PixelBuffer, params: &TransformParams) {
    reorder(buffer, &params.channels);
}

pub fn inverse(buffer: &mut PixelBuffer, params: &TransformParams) {
    reorder(buffer, &params.channels.inverse());
}

/// Output channel `k` of each pixel takes input channel `order.source(k)`.
fn reorder(buffer: &mut PixelBuffer, order: &ChannelOrder) {
    if order.is_identity() {
        return;
    }
    let sources = order.sources();
    for px in buffer.pixels_mut() {
        let src: [u8; 4] = [px[0], px[1], px[2], px[3]];
        for (dst, &source) in px.iter_mut().zip(sources.iter()) {
            *dst = src[source];
        }
    }
}
