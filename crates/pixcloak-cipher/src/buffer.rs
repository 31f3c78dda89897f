// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// RGBA pixel buffer — the H x W x 4 array every transform works on.

use pixcloak_core::error::{CloakError, Result};
use pixcloak_core::types::CHANNELS;

/// Row-major, interleaved RGBA8 pixels with a fixed shape.
///
/// The byte length is always `height * width * 4`; the constructors refuse
/// anything else, so every transform can rely on the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    // -- Construction ---------------------------------------------------------

    /// A buffer of the given size with every byte set to zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = byte_len(width, height, CHANNELS)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap RGBA8 bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::from_raw(width, height, CHANNELS, data)
    }

    /// Wrap RGB8 bytes, appending an opaque alpha channel.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::from_raw(width, height, 3, data)
    }

    /// Wrap interleaved bytes with 3 (RGB) or 4 (RGBA) channels per pixel.
    pub fn from_raw(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels != 3 && channels != CHANNELS {
            return Err(CloakError::ShapeMismatch {
                expected: format!("{height}x{width}x3 or {height}x{width}x4"),
                actual: format!("{height}x{width}x{channels}"),
            });
        }

        let expected = byte_len(width, height, channels)?;
        if data.len() != expected {
            return Err(CloakError::ShapeMismatch {
                expected: format!("{height}x{width}x{channels} ({expected} bytes)"),
                actual: format!("{} bytes", data.len()),
            });
        }

        let data = if channels == 3 {
            data.chunks_exact(3)
                .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], u8::MAX])
                .collect()
        } else {
            data
        };

        Ok(Self {
            width,
            height,
            data,
        })
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }

    /// Number of spatial positions (`height * width`).
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return the raw RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The four channel values at flattened position `index`.
    ///
    /// # Panics
    /// Panics when `index >= pixel_count()`.
    pub fn pixel(&self, index: usize) -> [u8; CHANNELS] {
        let start = index * CHANNELS;
        let mut px = [0; CHANNELS];
        px.copy_from_slice(&self.data[start..start + CHANNELS]);
        px
    }

    /// Iterate over pixels as 4-byte slices.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(CHANNELS)
    }

    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }
}

/// Byte length of a `width x height x channels` buffer, or `ShapeMismatch` on overflow.
fn byte_len(width: u32, height: u32, channels: usize) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| CloakError::ShapeMismatch {
            expected: "a buffer that fits in memory".into(),
            actual: format!("{height}x{width}x{channels}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(buf.shape(), (2, 3, 4));
        assert_eq!(buf.pixel_count(), 6);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn rgb_gets_opaque_alpha() {
        let buf = PixelBuffer::from_rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn wrong_length_is_shape_mismatch() {
        let err = PixelBuffer::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, CloakError::ShapeMismatch { .. }));
    }

    #[test]
    fn unsupported_channel_count_is_shape_mismatch() {
        let err = PixelBuffer::from_raw(1, 1, 2, vec![0, 0]).unwrap_err();
        assert!(matches!(err, CloakError::ShapeMismatch { .. }));
    }

    #[test]
    fn pixel_reads_one_position() {
        let buf = PixelBuffer::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(buf.pixel(1), [5, 6, 7, 8]);
        assert_eq!(buf.pixels().count(), 2);
    }

    #[test]
    fn empty_image_is_allowed() {
        let buf = PixelBuffer::from_rgba(0, 5, Vec::new()).unwrap();
        assert_eq!(buf.pixel_count(), 0);
    }
}
