// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// XOR every byte with the key. Self-inverse.

use super::TransformParams;
use crate::buffer::PixelBuffer;

pub fn forward(buffer: &mut PixelBuffer, params: &TransformParams) {
    let key = params.key_byte();
    if key == 0 {
        return;
    }
    for byte in buffer.as_bytes_mut() {
        *byte ^= key;
    }
}

pub fn inverse(buffer: &mut PixelBuffer, params: &TransformParams) {
    forward(buffer, params);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(key: u64) -> TransformParams {
        TransformParams {
            key,
            ..Default::default()
        }
    }

    #[test]
    fn zeros_become_key() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        forward(&mut buf, &params(5));
        assert!(buf.as_bytes().iter().all(|&b| b == 5));
    }

    #[test]
    fn self_inverse_for_every_byte_key() {
        let original =
            PixelBuffer::from_rgba(8, 8, (0..=255).collect()).unwrap();
        for key in 0..=255 {
            let mut buf = original.clone();
            forward(&mut buf, &params(key));
            forward(&mut buf, &params(key));
            assert_eq!(buf, original, "key {key}");
        }
    }

    #[test]
    fn wide_key_is_reduced_mod_256() {
        let mut wide = PixelBuffer::from_rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
        let mut narrow = wide.clone();
        forward(&mut wide, &params(256 + 9));
        forward(&mut narrow, &params(9));
        assert_eq!(wide, narrow);
    }
}
