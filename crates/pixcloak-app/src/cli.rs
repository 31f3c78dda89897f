// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line parsing.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use pixcloak_core::error::{CloakError, Result};
use pixcloak_core::types::Mode;

pub const USAGE: &str = "\
Usage:
  pixcloak encrypt <input> <output> [OPTIONS]
  pixcloak decrypt <input> <output> [OPTIONS] [--expect HEX]
  pixcloak hash <input>

Options:
  --ops LIST        colon-separated operations (xor, add, channel_swap, permute, swap_pairs)
  --key N           key/seed shared by every operation
  --channels ORDER  channel order for channel_swap, e.g. BGR or ABGR
  --config FILE     JSON config file (also read from $PIXCLOAK_CONFIG)
  --strict          reject keys above 255 for xor/add
  --expect HEX      after decrypt, require this pixel fingerprint
  -h, --help        show this help";

/// Values given on the command line; `None` means "use the config file".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub operations: Option<String>,
    pub key: Option<u64>,
    pub channels: Option<String>,
    pub config: Option<PathBuf>,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run {
        mode: Mode,
        input: PathBuf,
        output: PathBuf,
        overrides: Overrides,
        expect: Option<String>,
    },
    Hash {
        input: PathBuf,
    },
    Help,
}

fn usage_error(detail: impl Into<String>) -> CloakError {
    CloakError::InvalidConfiguration(detail.into())
}

/// Subcommands, flags and flag values must be UTF-8; paths may be anything.
fn utf8(arg: &OsStr) -> Result<&str> {
    arg.to_str()
        .ok_or_else(|| usage_error(format!("argument {arg:?} is not valid UTF-8")))
}

/// Parse the arguments after the program name.
pub fn parse(args: &[OsString]) -> Result<Command> {
    let mut iter = args.iter();
    let Some(sub) = iter.next() else {
        return Ok(Command::Help);
    };

    let mode = match utf8(sub)? {
        "-h" | "--help" | "help" => return Ok(Command::Help),
        "encrypt" => Mode::Encrypt,
        "decrypt" => Mode::Decrypt,
        "hash" => {
            let input = iter
                .next()
                .ok_or_else(|| usage_error("hash needs an input image"))?;
            if let Some(extra) = iter.next() {
                return Err(usage_error(format!("unexpected argument {extra:?}")));
            }
            return Ok(Command::Hash {
                input: PathBuf::from(input),
            });
        }
        other => return Err(usage_error(format!("unknown command {other:?}"))),
    };

    let mut positional = Vec::new();
    let mut overrides = Overrides::default();
    let mut expect = None;

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| usage_error(format!("{flag} needs a value")))
        };
        let Some(flag) = arg.to_str() else {
            positional.push(PathBuf::from(arg));
            continue;
        };
        match flag {
            "-h" | "--help" => return Ok(Command::Help),
            "--ops" => overrides.operations = Some(utf8(value(flag)?)?.to_owned()),
            "--key" => overrides.key = Some(parse_key(utf8(value(flag)?)?)?),
            "--channels" => overrides.channels = Some(utf8(value(flag)?)?.to_owned()),
            "--config" => overrides.config = Some(PathBuf::from(value(flag)?)),
            "--expect" if mode == Mode::Decrypt => {
                expect = Some(utf8(value(flag)?)?.to_owned());
            }
            "--strict" => overrides.strict = true,
            flag if flag.starts_with("--") => {
                return Err(usage_error(format!("unknown option {flag:?}")));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [input, output]: [PathBuf; 2] = positional.try_into().map_err(|_| {
        usage_error(format!("{mode} needs exactly an input and an output path"))
    })?;

    Ok(Command::Run {
        mode,
        input,
        output,
        overrides,
        expect,
    })
}

/// Keys are non-negative integers.
fn parse_key(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| usage_error(format!("key/seed must be a non-negative integer, got {raw:?}")))
}
