// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cipher configuration and its JSON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CloakError, Result};
use crate::types::{self, ChannelOrder, Operation};

/// Persistent cipher settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Colon-separated operation list, e.g. `xor:add:permute`.
    pub operations: String,
    /// Key shared by every operation; also the shuffle seed.
    pub key: u64,
    /// Channel order used by `channel_swap`.
    pub channels: String,
    /// Reject keys above 255 when `xor` or `add` is in the list.
    pub strict_key: bool,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            operations: "xor:add".into(),
            key: 42,
            channels: ChannelOrder::DEFAULT_LABELS.into(),
            strict_key: false,
        }
    }
}

impl CipherConfig {
    /// Parsed operation list.
    pub fn operations(&self) -> Result<Vec<Operation>> {
        types::parse_operations(&self.operations)
    }

    /// Parsed channel order.
    pub fn channel_order(&self) -> Result<ChannelOrder> {
        ChannelOrder::parse(&self.channels)
    }

    /// Check every field without running anything.
    pub fn validate(&self) -> Result<()> {
        let ops = self.operations()?;
        if ops.contains(&Operation::ChannelSwap) {
            self.channel_order()?;
        }
        let byte_key_in_use = ops.iter().any(|op| op.uses_byte_key());
        if self.strict_key && byte_key_in_use && self.key > u64::from(u8::MAX) {
            return Err(CloakError::InvalidConfiguration(format!(
                "key {} is outside 0..=255 required by xor/add in strict mode",
                self.key
            )));
        }
        Ok(())
    }
}

/// Read a config file written as JSON.
pub fn load_config(path: &Path) -> Result<CipherConfig> {
    let data = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)?;
    Ok(config)
}

/// Write a config file as pretty-printed JSON.
pub fn save_config(path: &Path, config: &CipherConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}
