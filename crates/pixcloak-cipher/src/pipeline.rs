// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline executor — forward steps left to right to encrypt, inverse steps
// right to left to decrypt.

use pixcloak_core::config::CipherConfig;
use pixcloak_core::error::{CloakError, Result};
use pixcloak_core::types::{self, ChannelOrder, Mode, Operation};
use tracing::{debug, info, instrument};

use crate::buffer::PixelBuffer;
use crate::registry::{self, TransformPair};
use crate::transforms::TransformParams;

/// A validated operation list plus the parameters shared by its steps.
///
/// Everything that can fail is checked by the constructors, so running a
/// `Pipeline` cannot fail and never touches the caller's buffer.
///
/// ```ignore
/// let pipeline = Pipeline::parse("xor:add:permute", 42, "BGR")?;
/// let hidden = pipeline.encrypt(&buffer);
/// assert_eq!(pipeline.decrypt(&hidden), buffer);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<(Operation, TransformPair)>,
    params: TransformParams,
}

impl Pipeline {
    // -- Construction ---------------------------------------------------------

    /// Build from an already-parsed operation list.
    pub fn new(operations: &[Operation], key: u64, channels: ChannelOrder) -> Result<Self> {
        let steps = operations
            .iter()
            .map(|&op| (op, registry::transform_pair(op)))
            .collect();
        Self::from_steps(steps, key, channels)
    }

    /// Build from a colon-separated list such as `xor:add:permute`.
    ///
    /// Every name is resolved through the registry before anything else, and
    /// the channel order is only parsed when `channel_swap` is in the list.
    pub fn parse(ops_list: &str, key: u64, channels: &str) -> Result<Self> {
        let steps = types::operation_names(ops_list)
            .map(registry::lookup)
            .collect::<Result<Vec<_>>>()?;
        let order = if steps.iter().any(|(op, _)| *op == Operation::ChannelSwap) {
            ChannelOrder::parse(channels)?
        } else {
            ChannelOrder::default()
        };
        Self::from_steps(steps, key, order)
    }

    fn from_steps(
        steps: Vec<(Operation, TransformPair)>,
        key: u64,
        channels: ChannelOrder,
    ) -> Result<Self> {
        if steps.is_empty() {
            return Err(CloakError::InvalidConfiguration(
                "no operations specified".into(),
            ));
        }
        Ok(Self {
            steps,
            params: TransformParams::new(key, channels),
        })
    }

    /// Build from a `CipherConfig`, applying its strict-key rule.
    pub fn from_config(config: &CipherConfig) -> Result<Self> {
        config.validate()?;
        Self::parse(&config.operations, config.key, &config.channels)
    }

    // -- Accessors ------------------------------------------------------------

    pub fn operations(&self) -> Vec<Operation> {
        self.steps.iter().map(|(op, _)| *op).collect()
    }

    pub fn key(&self) -> u64 {
        self.params.key
    }

    pub fn channels(&self) -> ChannelOrder {
        self.params.channels
    }

    // -- Execution ------------------------------------------------------------

    pub fn encrypt(&self, buffer: &PixelBuffer) -> PixelBuffer {
        self.run(Mode::Encrypt, buffer)
    }

    pub fn decrypt(&self, buffer: &PixelBuffer) -> PixelBuffer {
        self.run(Mode::Decrypt, buffer)
    }

    /// Run every step on a copy of `buffer` and return the copy.
    #[instrument(skip_all, fields(mode = %mode, steps = self.steps.len()))]
    pub fn run(&self, mode: Mode, buffer: &PixelBuffer) -> PixelBuffer {
        info!(
            width = buffer.width(),
            height = buffer.height(),
            operations = %types::format_operations(&self.operations()),
            "Running pipeline"
        );

        let mut out = buffer.clone();
        let apply = |(op, pair): &(Operation, TransformPair), out: &mut PixelBuffer| {
            debug!(operation = %op, "Applying step");
            (pair.for_mode(mode))(out, &self.params);
        };
        match mode {
            Mode::Encrypt => self.steps.iter().for_each(|step| apply(step, &mut out)),
            Mode::Decrypt => self.steps.iter().rev().for_each(|step| apply(step, &mut out)),
        }

        debug!("Pipeline complete");
        out
    }
}

/// Parse `ops_list` and encrypt `buffer` in one call.
pub fn encrypt(
    buffer: &PixelBuffer,
    ops_list: &str,
    key: u64,
    channels: &str,
) -> Result<PixelBuffer> {
    Ok(Pipeline::parse(ops_list, key, channels)?.encrypt(buffer))
}

/// Parse `ops_list` and decrypt `buffer` in one call.
pub fn decrypt(
    buffer: &PixelBuffer,
    ops_list: &str,
    key: u64,
    channels: &str,
) -> Result<PixelBuffer> {
    Ok(Pipeline::parse(ops_list, key, channels)?.decrypt(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let data = (0..width * height * 4).map(|i| (i * 31 % 256) as u8).collect();
        PixelBuffer::from_rgba(width, height, data).unwrap()
    }

    #[test]
    fn xor_on_zeros_example() {
        let zeros = PixelBuffer::new(2, 2).unwrap();
        let hidden = encrypt(&zeros, "xor", 5, "").unwrap();
        assert!(hidden.as_bytes().iter().all(|&b| b == 5));
        let restored = decrypt(&hidden, "xor", 5, "").unwrap();
        assert_eq!(restored, zeros);
    }

    #[test]
    fn full_pipeline_round_trips() {
        let original = gradient(13, 9);
        let ops_list = "xor:add:channel_swap:permute:swap_pairs";
        let pipeline = Pipeline::parse(ops_list, 987_654_321, "GBR").unwrap();
        let hidden = pipeline.encrypt(&original);
        assert_ne!(hidden, original);
        assert_eq!(pipeline.decrypt(&hidden), original);
    }

    #[test]
    fn decrypt_runs_in_reverse_order() {
        // xor and add do not commute, so undoing them in forward order
        // leaves the buffer scrambled.
        let original = gradient(4, 4);
        let pipeline = Pipeline::parse("xor:add", 200, "").unwrap();
        let hidden = pipeline.encrypt(&original);

        let mut wrong_order = hidden.clone();
        let params = TransformParams::new(200, ChannelOrder::default());
        crate::transforms::xor::inverse(&mut wrong_order, &params);
        crate::transforms::add_sub::inverse(&mut wrong_order, &params);
        assert_ne!(wrong_order, original);

        assert_eq!(pipeline.decrypt(&hidden), original);
    }

    #[test]
    fn unknown_operation_is_rejected_up_front() {
        let original = gradient(2, 2);
        let result = encrypt(&original, "xor:rotate", 5, "");
        assert!(matches!(
            result,
            Err(CloakError::UnknownOperation(name)) if name == "rotate"
        ));
    }

    #[test]
    fn caller_buffer_is_not_mutated() {
        let original = gradient(3, 3);
        let snapshot = original.clone();
        let pipeline = Pipeline::parse("xor:permute", 3, "").unwrap();
        let _ = pipeline.encrypt(&original);
        assert_eq!(original, snapshot);
    }

    #[test]
    fn bad_channel_order_only_matters_for_channel_swap() {
        assert!(Pipeline::parse("xor", 1, "QQQ").is_ok());
        assert!(matches!(
            Pipeline::parse("xor:channel_swap", 1, "QQQ"),
            Err(CloakError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn parse_resolves_names_through_registry() {
        let pipeline = Pipeline::parse(" Permute : :SWAP_PAIRS:skip ", 4, "").unwrap();
        assert_eq!(
            pipeline.operations(),
            vec![Operation::Permute, Operation::SwapPairs, Operation::Noop]
        );
        assert!(matches!(
            Pipeline::parse(":", 4, ""),
            Err(CloakError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_operation_list_is_invalid() {
        assert!(matches!(
            Pipeline::new(&[], 1, ChannelOrder::default()),
            Err(CloakError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn from_config_honours_strict_key() {
        let config = CipherConfig {
            key: 1000,
            strict_key: true,
            ..Default::default()
        };
        assert!(Pipeline::from_config(&config).is_err());

        let lenient = CipherConfig {
            strict_key: false,
            ..config
        };
        let pipeline = Pipeline::from_config(&lenient).unwrap();
        assert_eq!(pipeline.key(), 1000);
        assert_eq!(
            pipeline.operations(),
            vec![Operation::Xor, Operation::AddSub]
        );
    }

    #[test]
    fn noop_steps_change_nothing() {
        let original = gradient(3, 2);
        let pipeline = Pipeline::parse("none:skip:noop", 77, "").unwrap();
        assert_eq!(pipeline.encrypt(&original), original);
        assert_eq!(pipeline.decrypt(&original), original);
    }
}
