// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transform registry — operation name to (forward, inverse) function pair.

use pixcloak_core::error::{CloakError, Result};
use pixcloak_core::types::{Mode, Operation};

use crate::buffer::PixelBuffer;
use crate::transforms::{self, TransformParams};

/// In-place transform over a pixel buffer.
pub type TransformFn = fn(&mut PixelBuffer, &TransformParams);

/// A transform and its exact undo.
#[derive(Clone, Copy)]
pub struct TransformPair {
    pub forward: TransformFn,
    pub inverse: TransformFn,
}

impl TransformPair {
    /// The function to run for `mode`.
    pub fn for_mode(&self, mode: Mode) -> TransformFn {
        match mode {
            Mode::Encrypt => self.forward,
            Mode::Decrypt => self.inverse,
        }
    }
}

impl std::fmt::Debug for TransformPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformPair").finish_non_exhaustive()
    }
}

fn noop(_buffer: &mut PixelBuffer, _params: &TransformParams) {}

/// Forward and inverse functions for `op`.
pub fn transform_pair(op: Operation) -> TransformPair {
    let (forward, inverse): (TransformFn, TransformFn) = match op {
        Operation::Xor => (transforms::xor::forward, transforms::xor::inverse),
        Operation::AddSub => (transforms::add_sub::forward, transforms::add_sub::inverse),
        Operation::ChannelSwap => (
            transforms::channel_swap::forward,
            transforms::channel_swap::inverse,
        ),
        Operation::Permute => (transforms::permute::forward, transforms::permute::inverse),
        Operation::SwapPairs => (
            transforms::swap_pairs::forward,
            transforms::swap_pairs::inverse,
        ),
        Operation::Noop => (noop, noop),
    };
    TransformPair { forward, inverse }
}

/// Resolve an operation name into its operation and function pair.
pub fn lookup(name: &str) -> Result<(Operation, TransformPair)> {
    let op = Operation::from_name(name)
        .ok_or_else(|| CloakError::UnknownOperation(name.trim().to_owned()))?;
    Ok((op, transform_pair(op)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelBuffer {
        PixelBuffer::from_rgba(3, 3, (0..36).map(|i| (i * 7) as u8).collect()).unwrap()
    }

    #[test]
    fn every_pair_round_trips() {
        let params = TransformParams::new(173, "GBRA".parse().unwrap());
        for op in Operation::ALL {
            let pair = transform_pair(op);
            let mut buf = sample();
            (pair.forward)(&mut buf, &params);
            (pair.inverse)(&mut buf, &params);
            assert_eq!(buf, sample(), "{op}");
        }
    }

    #[test]
    fn self_inverse_ops_undo_themselves() {
        let params = TransformParams::new(9, Default::default());
        for op in Operation::ALL.into_iter().filter(|op| op.is_self_inverse()) {
            let forward = transform_pair(op).forward;
            let mut buf = sample();
            forward(&mut buf, &params);
            forward(&mut buf, &params);
            assert_eq!(buf, sample(), "{op}");
        }
    }

    #[test]
    fn lookup_known_and_unknown() {
        let (op, _) = lookup("Permute").unwrap();
        assert_eq!(op, Operation::Permute);
        assert!(matches!(
            lookup("rotate"),
            Err(CloakError::UnknownOperation(name)) if name == "rotate"
        ));
    }

    #[test]
    fn for_mode_picks_direction() {
        let pair = transform_pair(Operation::AddSub);
        let params = TransformParams::new(1, Default::default());
        let mut buf = PixelBuffer::from_rgba(1, 1, vec![5, 5, 5, 5]).unwrap();
        (pair.for_mode(Mode::Decrypt))(&mut buf, &params);
        assert_eq!(buf.as_bytes(), &[4, 4, 4, 4]);
    }
}
