// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Add the key to every byte modulo 256; the inverse subtracts it.

use super::TransformParams;
use crate::buffer::PixelBuffer;

pub fn forward(buffer: &mut PixelBuffer, params: &TransformParams) {
    let key = params.key_byte();
    for byte in buffer.as_bytes_mut() {
        *byte = byte.wrapping_add(key);
    }
}

pub fn inverse(buffer: &mut PixelBuffer, params: &TransformParams) {
    let key = params.key_byte();
    for byte in buffer.as_bytes_mut() {
        *byte = byte.wrapping_sub(key);
    }
}
