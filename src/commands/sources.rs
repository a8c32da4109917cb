//! `linkwatch sources` command - sources ranked by negative post count

use crate::cli::{Cli, OutputFormat};
use linkwatch_core::dashboard::Dashboard;
use linkwatch_core::error::Result;
use linkwatch_core::sources::ranked;
use linkwatch_core::store::LinkStore;

/// Execute the sources command
pub fn execute<S: LinkStore + Sync>(cli: &Cli, dashboard: &Dashboard<S>) -> Result<()> {
    let sources = ranked(dashboard.sources());

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sources)?);
        }
        OutputFormat::Human => {
            if sources.is_empty() {
                if !cli.quiet {
                    println!("No sources found");
                }
                return Ok(());
            }
            for source in sources {
                let flag = if source.suspicious { " [suspicious]" } else { "" };
                println!(
                    "{:>4}  {} ({}) {}{}",
                    source.negative_post_count,
                    source.display_name(),
                    source.source_type,
                    source.profile_url,
                    flag
                );
            }
        }
    }
    Ok(())
}
