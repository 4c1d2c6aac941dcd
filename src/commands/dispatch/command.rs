//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::cli::{Cli, Commands};
use crate::commands;
use namecat_core::config::EngineConfig;
use namecat_core::error::Result;
use tracing::debug;

use super::trace_phase;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Load the catalog named by `--catalog`, or the default one under root
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = Catalog::discover(self.cli.catalog.as_deref(), self.root)?;
        debug!(path = %catalog.path().display(), "using_catalog");
        trace_phase!(self, "load_catalog");
        Ok(catalog)
    }

    /// Load `--config`, or `namecat.toml` under root, or defaults
    pub fn load_config(&self) -> Result<EngineConfig> {
        let config = EngineConfig::discover(self.cli.config.as_deref(), self.root)?;
        trace_phase!(self, "load_config");
        Ok(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("namecat {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Discover related names in a name catalog.");
        println!();
        println!("Run `namecat --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let cli = ctx.cli;
        match self {
            Commands::Similar(args) => {
                let config = ctx.load_config()?;
                let catalog = ctx.load_catalog()?;
                commands::similar::execute(cli, &catalog, &config, args)
            }
            Commands::Classify(args) => {
                let config = ctx.load_config()?;
                commands::classify::execute(cli, &config, args)
            }
            Commands::Duplicates(args) => {
                let catalog = ctx.load_catalog()?;
                commands::duplicates::execute(cli, &catalog, args)
            }
            Commands::List(args) => {
                let catalog = ctx.load_catalog()?;
                commands::list::execute(cli, &catalog, args)
            }
            Commands::Syllables => {
                let catalog = ctx.load_catalog()?;
                commands::syllables::execute(cli, &catalog)
            }
            Commands::Phonetic(args) => commands::phonetic::execute(cli, args),
        }
    }
}
