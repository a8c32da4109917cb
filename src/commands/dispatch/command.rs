//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use linkwatch_core::config::Config;
use linkwatch_core::dashboard::Dashboard;
use linkwatch_core::error::Result;
use linkwatch_core::store::{open_store, AnyStore};

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Config file plus environment overrides
    pub fn config(&self) -> Result<Config> {
        Config::resolve(self.cli.config.as_deref())
    }

    /// Open the store named by `--store`, the environment or the config
    /// file, and load its collections
    pub fn open_dashboard(&self) -> Result<Dashboard<AnyStore>> {
        let config = self.config()?;
        let locator = self
            .cli
            .store
            .clone()
            .or_else(|| config.store.clone())
            .unwrap_or_default();

        let store = open_store(&locator, &config)?;
        trace_command!(self.cli, self.start, "open_store");
        tracing::debug!(store = %store.describe(), "store_selected");

        let dashboard = Dashboard::load(store, config.source_match)?;
        trace_command!(self.cli, self.start, "load_store");
        Ok(dashboard)
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
        println!("linkwatch {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Tracks reported negative links and retires duplicate reports.");
        println!();
        println!("Run `linkwatch --help` for usage information.");
        Ok(())
    }
}
