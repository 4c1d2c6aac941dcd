//! Command dispatch logic for namecat

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use namecat_core::error::Result;
use tracing::debug;

mod command;
mod macros;

pub(crate) use macros::trace_phase;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    trace_phase!(ctx, "execute_command");
    result
}
