// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command execution: resolve settings, load, transform, save.

use std::path::{Path, PathBuf};

use pixcloak_cipher::{Pipeline, fingerprint, verify_fingerprint};
use pixcloak_core::config::{self, CipherConfig};
use pixcloak_core::error::Result;
use pixcloak_core::types::Mode;
use tracing::{debug, info};

use crate::cli::Overrides;

/// Environment variable naming a default config file.
pub const CONFIG_ENV: &str = "PIXCLOAK_CONFIG";

/// Merge config sources: command line over config file over defaults.
pub fn resolve_config(overrides: &Overrides, env_path: Option<PathBuf>) -> Result<CipherConfig> {
    let mut config = match overrides.config.clone().or(env_path) {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            config::load_config(&path)?
        }
        None => CipherConfig::default(),
    };

    if let Some(ops) = &overrides.operations {
        config.operations = ops.clone();
    }
    if let Some(key) = overrides.key {
        config.key = key;
    }
    if let Some(channels) = &overrides.channels {
        config.channels = channels.clone();
    }
    if overrides.strict {
        config.strict_key = true;
    }
    Ok(config)
}

/// Encrypt or decrypt `input` into `output`.
///
/// The pipeline is validated before the input is even read, so bad settings
/// never produce an output file.
pub fn run_pipeline(
    mode: Mode,
    input: &Path,
    output: &Path,
    config: &CipherConfig,
    expect: Option<&str>,
) -> Result<String> {
    let pipeline = Pipeline::from_config(config)?;
    pixcloak_image::OutputFormat::from_path(output)?;

    let buffer = pixcloak_image::load_image(input)?;
    let result = pipeline.run(mode, &buffer);

    if let Some(expected) = expect {
        verify_fingerprint(&result, expected)?;
        info!("Decrypted pixels match the expected fingerprint");
    }

    pixcloak_image::save_image(&result, output)?;
    let digest = fingerprint(&result);
    info!(mode = %mode, output = %output.display(), fingerprint = %digest, "Done");
    Ok(digest)
}

/// Fingerprint of the decoded pixels of `input`.
pub fn hash(input: &Path) -> Result<String> {
    let buffer = pixcloak_image::load_image(input)?;
    Ok(fingerprint(&buffer))
}
