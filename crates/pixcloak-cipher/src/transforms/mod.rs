// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transforms module — the five bijective pixel transforms.
//
// Every transform rewrites a `PixelBuffer` in place and never changes its
// shape. Each module exposes a `forward` and an `inverse` with the shared
// `TransformFn` signature so the registry can pair them up.

pub mod add_sub;
pub mod channel_swap;
pub mod permute;
pub mod swap_pairs;
pub mod xor;

use pixcloak_core::types::ChannelOrder;

/// Parameters shared by every step of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformParams {
    /// Key for xor/add and seed for permute/swap_pairs.
    pub key: u64,
    /// Channel order for channel_swap.
    pub channels: ChannelOrder,
}

impl TransformParams {
    pub fn new(key: u64, channels: ChannelOrder) -> Self {
        Self { key, channels }
    }

    /// The key reduced modulo 256.
    pub fn key_byte(&self) -> u8 {
        (self.key % 256) as u8
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::new(0, ChannelOrder::default())
    }
}
