// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PixCloak — reversible pixel-manipulation image obfuscation.
//
// Entry point. Initialises logging, parses arguments and runs one command.

mod cli;
mod commands;

use std::ffi::OsString;
use std::process::ExitCode;

use pixcloak_core::error::Result;
use pixcloak_core::human_errors::humanize_error;

use cli::Command;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    match cli::parse(&args).and_then(execute) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "pixcloak failed");
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::from(human.exit_code())
        }
    }
}

fn execute(command: Command) -> Result<()> {
    match command {
        Command::Help => {
            println!("{}", cli::USAGE);
            Ok(())
        }
        Command::Hash { input } => {
            println!("{}", commands::hash(&input)?);
            Ok(())
        }
        Command::Run {
            mode,
            input,
            output,
            overrides,
            expect,
        } => {
            let env_path = std::env::var_os(commands::CONFIG_ENV).map(Into::into);
            let config = commands::resolve_config(&overrides, env_path)?;
            let digest =
                commands::run_pipeline(mode, &input, &output, &config, expect.as_deref())?;
            println!("{digest}");
            Ok(())
        }
    }
}
