//! Command implementations for all linkwatch commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use linkwatch_core::error::Result;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let cli = ctx.cli;
        match self {
            Commands::Normalize(args) => commands::normalize::execute(cli, &args.urls),
            Commands::List => {
                let dashboard = ctx.open_dashboard()?;
                commands::list::execute(cli, &dashboard)
            }
            Commands::Sources => {
                let dashboard = ctx.open_dashboard()?;
                commands::sources::execute(cli, &dashboard)
            }
            Commands::Add(args) => {
                let mut dashboard = ctx.open_dashboard()?;
                commands::add::execute(cli, &mut dashboard, args)?;
                trace_command!(cli, ctx.start, "execute_command");
                Ok(())
            }
            Commands::Update(args) => {
                let mut dashboard = ctx.open_dashboard()?;
                commands::update::execute(cli, &mut dashboard, args)
            }
            Commands::Delete(args) => {
                let mut dashboard = ctx.open_dashboard()?;
                commands::delete::execute(cli, &mut dashboard, args)?;
                trace_command!(cli, ctx.start, "execute_command");
                Ok(())
            }
            Commands::Duplicates => {
                let dashboard = ctx.open_dashboard()?;
                commands::duplicates::execute(cli, &dashboard)
            }
            Commands::Dedup(args) => {
                let mut dashboard = ctx.open_dashboard()?;
                commands::dedup::execute(cli, &mut dashboard, args)?;
                trace_command!(cli, ctx.start, "execute_command");
                Ok(())
            }
        }
    }
}
