// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the PixCloak pipeline.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CloakError;

/// Number of interleaved channels in every pixel buffer (RGBA).
pub const CHANNELS: usize = 4;

/// Separator between operation names in a pipeline string (`xor:add:permute`).
pub const OPERATION_SEPARATOR: char = ':';

/// A single reversible step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// XOR every byte with the key (self-inverse).
    Xor,
    /// Wrapping add of the key; the inverse subtracts.
    AddSub,
    /// Reorder the channel axis.
    ChannelSwap,
    /// Shuffle pixel positions with a seeded permutation.
    Permute,
    /// Swap disjoint seeded pixel pairs (self-inverse).
    SwapPairs,
    /// Placeholder step that leaves the buffer untouched.
    Noop,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 6] = [
        Operation::Xor,
        Operation::AddSub,
        Operation::ChannelSwap,
        Operation::Permute,
        Operation::SwapPairs,
        Operation::Noop,
    ];

    /// Canonical name as written in a pipeline string.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Xor => "xor",
            Operation::AddSub => "add",
            Operation::ChannelSwap => "channel_swap",
            Operation::Permute => "permute",
            Operation::SwapPairs => "swap_pairs",
            Operation::Noop => "noop",
        }
    }

    /// Look up an operation by name. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "xor" => Some(Operation::Xor),
            "add" => Some(Operation::AddSub),
            "channel_swap" => Some(Operation::ChannelSwap),
            "permute" => Some(Operation::Permute),
            "swap_pairs" => Some(Operation::SwapPairs),
            "noop" | "none" | "skip" => Some(Operation::Noop),
            _ => None,
        }
    }

    /// Whether forward and inverse are the same function.
    pub fn is_self_inverse(self) -> bool {
        matches!(
            self,
            Operation::Xor | Operation::SwapPairs | Operation::Noop
        )
    }

    /// Whether the operation consumes only the low byte of the key.
    pub fn uses_byte_key(self) -> bool {
        matches!(self, Operation::Xor | Operation::AddSub)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CloakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_name(s).ok_or_else(|| CloakError::UnknownOperation(s.trim().to_owned()))
    }
}

/// Split a colon-separated pipeline string into trimmed, non-empty names.
pub fn operation_names(list: &str) -> impl Iterator<Item = &str> {
    list.split(OPERATION_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Parse a colon-separated pipeline string such as `xor:add:permute`.
///
/// Empty segments are skipped. The whole list is validated before anything
/// is returned, so an unknown name anywhere fails the call.
pub fn parse_operations(list: &str) -> Result<Vec<Operation>, CloakError> {
    let ops = operation_names(list)
        .map(Operation::from_str)
        .collect::<Result<Vec<_>, _>>()?;

    if ops.is_empty() {
        return Err(CloakError::InvalidConfiguration(
            "no operations specified".into(),
        ));
    }
    Ok(ops)
}

/// Render an operation list back into its colon-separated form.
pub fn format_operations(ops: &[Operation]) -> String {
    ops.iter()
        .map(|op| op.name())
        .collect::<Vec<_>>()
        .join(":")
}

/// Direction the pipeline runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Forward functions, left to right.
    Encrypt,
    /// Inverse functions, right to left.
    Decrypt,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Encrypt => f.write_str("encrypt"),
            Mode::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// One channel of an RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Position of the channel inside an interleaved RGBA pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }

    pub fn label(self) -> char {
        match self {
            Channel::Red => 'R',
            Channel::Green => 'G',
            Channel::Blue => 'B',
            Channel::Alpha => 'A',
        }
    }

    pub fn from_label(label: char) -> Option<Self> {
        match label.to_ascii_uppercase() {
            'R' => Some(Channel::Red),
            'G' => Some(Channel::Green),
            'B' => Some(Channel::Blue),
            'A' => Some(Channel::Alpha),
            _ => None,
        }
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => Channel::Red,
            1 => Channel::Green,
            2 => Channel::Blue,
            _ => Channel::Alpha,
        }
    }
}

/// A permutation of the four RGBA channels.
///
/// Output channel `k` is taken from input channel `source(k)`. A three-letter
/// order (`"BGR"`) leaves alpha in place; a four-letter order (`"ABGR"`)
/// moves alpha too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelOrder {
    sources: [usize; CHANNELS],
}

impl ChannelOrder {
    /// Order used when the caller supplies none.
    pub const DEFAULT_LABELS: &'static str = "BGR";

    /// The order that leaves every channel where it is.
    pub fn identity() -> Self {
        Self {
            sources: [0, 1, 2, 3],
        }
    }

    /// Parse a channel-order string. An empty string yields the default `BGR`.
    pub fn parse(labels: &str) -> Result<Self, CloakError> {
        let labels = labels.trim();
        if labels.is_empty() {
            return Self::parse(Self::DEFAULT_LABELS);
        }

        let channels = labels
            .chars()
            .map(|c| {
                Channel::from_label(c).ok_or_else(|| {
                    CloakError::InvalidConfiguration(format!(
                        "channel order {labels:?} contains {c:?}; use letters from RGBA"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expected: &[Channel] = match channels.len() {
            3 => &[Channel::Red, Channel::Green, Channel::Blue],
            4 => &[Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha],
            n => {
                return Err(CloakError::InvalidConfiguration(format!(
                    "channel order {labels:?} has {n} letters; expected 3 (RGB) or 4 (RGBA)"
                )));
            }
        };

        let mut seen = [false; CHANNELS];
        for channel in &channels {
            if !expected.contains(channel) || seen[channel.index()] {
                return Err(CloakError::InvalidConfiguration(format!(
                    "channel order {labels:?} is not a permutation of {}",
                    expected.iter().map(|c| c.label()).collect::<String>()
                )));
            }
            seen[channel.index()] = true;
        }

        let mut sources = [0, 1, 2, 3];
        for (slot, channel) in channels.iter().enumerate() {
            sources[slot] = channel.index();
        }
        Ok(Self { sources })
    }

    /// Index of the input channel feeding output channel `output`.
    pub fn source(&self, output: usize) -> usize {
        self.sources[output]
    }

    pub fn sources(&self) -> [usize; CHANNELS] {
        self.sources
    }

    /// The permutation that undoes this one.
    pub fn inverse(&self) -> Self {
        let mut sources = [0; CHANNELS];
        for (output, &input) in self.sources.iter().enumerate() {
            sources[input] = output;
        }
        Self { sources }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self {
            sources: [2, 1, 0, 3],
        }
    }
}

impl std::fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &source in &self.sources {
            write!(f, "{}", Channel::from_index(source).label())?;
        }
        Ok(())
    }
}

impl FromStr for ChannelOrder {
    type Err = CloakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelOrder::parse(s)
    }
}
