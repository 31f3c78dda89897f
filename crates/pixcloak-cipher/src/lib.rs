// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixcloak-cipher — Reversible pixel transforms for PixCloak.
//
// Provides the RGBA pixel buffer, five bijective transforms (XOR, add/subtract,
// channel swap, pixel permutation, pixel-pair swaps), the name registry that
// pairs each transform with its inverse, and the pipeline that runs a list of
// them forwards to encrypt and backwards to decrypt.

pub mod buffer;
pub mod integrity;
pub mod pipeline;
pub mod registry;
pub mod rng;
pub mod transforms;

// Re-export the primary items so callers can use `pixcloak_cipher::Pipeline` etc.
pub use buffer::PixelBuffer;
pub use integrity::{fingerprint, verify_fingerprint};
pub use pipeline::{Pipeline, decrypt, encrypt};
pub use registry::{TransformFn, TransformPair, lookup, transform_pair};
pub use rng::{SplitMix64, permutation};
pub use transforms::TransformParams;
