//! Command dispatch logic for linkwatch

use std::time::Instant;

use crate::cli::Cli;
use linkwatch_core::error::Result;

mod command;
mod commands;
mod macros;

pub(crate) use macros::trace_command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
