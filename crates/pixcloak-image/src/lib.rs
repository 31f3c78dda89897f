// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixcloak-image — Image file adapter for PixCloak.
//
// Decodes any format the `image` crate understands into an RGBA
// `PixelBuffer`, and encodes results only to lossless formats so that every
// pixel value survives the trip to disk.

pub mod adapter;

pub use adapter::{
    OutputFormat, decode_image, encode_png, from_dynamic, into_dynamic, load_image, save_image,
    to_dynamic,
};
