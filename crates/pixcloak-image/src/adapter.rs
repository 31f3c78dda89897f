// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PixelBuffer adapter — `image` crate decode/encode around the cipher core.
// Operates on in-memory images and refuses lossy output formats.

use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use pixcloak_cipher::PixelBuffer;
use pixcloak_core::error::{CloakError, Result};
use tracing::{debug, info, instrument, warn};

/// Lossless formats an encrypted buffer may be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Bmp,
    Tiff,
}

impl OutputFormat {
    /// Pick the format from a path's extension. No extension means PNG.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Ok(OutputFormat::Png);
        };
        match ImageFormat::from_extension(ext) {
            Some(ImageFormat::Png) => Ok(OutputFormat::Png),
            Some(ImageFormat::Bmp) => Ok(OutputFormat::Bmp),
            Some(ImageFormat::Tiff) => Ok(OutputFormat::Tiff),
            _ => Err(CloakError::UnsupportedFormat(ext.to_ascii_lowercase())),
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

/// Formats whose stored pixels may already differ from the original.
fn is_lossy(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::WebP | ImageFormat::Avif | ImageFormat::Gif
    )
}

// -- Decoding -----------------------------------------------------------------

/// Load an image file into an RGBA buffer.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    if let Some(format) = reader.format() {
        warn_if_lossy(format);
    }
    let img = reader.decode().map_err(|err| {
        CloakError::Image(format!("failed to open {}: {}", path.display(), err))
    })?;
    info!(width = img.width(), height = img.height(), "Image loaded");
    from_dynamic(&img)
}

/// Decode raw encoded bytes (PNG, BMP, ...) into an RGBA buffer.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode_image(data: &[u8]) -> Result<PixelBuffer> {
    if let Ok(format) = image::guess_format(data) {
        warn_if_lossy(format);
    }
    let img = image::load_from_memory(data)
        .map_err(|err| CloakError::Image(format!("failed to decode image: {}", err)))?;
    debug!(
        width = img.width(),
        height = img.height(),
        "Image decoded from bytes"
    );
    from_dynamic(&img)
}

fn warn_if_lossy(format: ImageFormat) {
    if is_lossy(format) {
        warn!(
            ?format,
            "Input is a lossy format; encrypt it, but never save results in it"
        );
    }
}

/// Convert any decoded image to RGBA8 and wrap it.
pub fn from_dynamic(img: &DynamicImage) -> Result<PixelBuffer> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_rgba(width, height, rgba.into_raw())
}

/// Copy a buffer back into an `image` crate RGBA image.
pub fn to_dynamic(buffer: &PixelBuffer) -> Result<DynamicImage> {
    into_dynamic(buffer.clone())
}

/// Move a buffer's pixels into an `image` crate RGBA image without copying.
pub fn into_dynamic(buffer: PixelBuffer) -> Result<DynamicImage> {
    let (width, height) = (buffer.width(), buffer.height());
    let data = buffer.into_raw();
    let len = data.len();
    let rgba = RgbaImage::from_raw(width, height, data).ok_or_else(|| {
        CloakError::ShapeMismatch {
            expected: format!("{height}x{width}x4"),
            actual: format!("{len} bytes"),
        }
    })?;
    Ok(DynamicImage::ImageRgba8(rgba))
}

// -- Encoding -----------------------------------------------------------------

/// Write a buffer to disk. The format comes from the extension and must be lossless.
#[instrument(skip(buffer), fields(path = %path.as_ref().display()))]
pub fn save_image(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let img = to_dynamic(buffer)?;
    img.save_with_format(path, format.image_format())
        .map_err(|err| {
            CloakError::Image(format!(
                "failed to save image to {}: {}",
                path.display(),
                err
            ))
        })?;
    info!(?format, width = buffer.width(), height = buffer.height(), "Image saved");
    Ok(())
}

/// Encode a buffer as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let img = to_dynamic(buffer)?;
    let mut bytes = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut bytes);
    img.write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| CloakError::Image(format!("PNG encoding failed: {}", err)))?;
    Ok(bytes)
}
