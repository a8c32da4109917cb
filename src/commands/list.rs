//! `linkwatch list` command - list tracked links in store order

use crate::cli::{Cli, OutputFormat};
use linkwatch_core::dashboard::Dashboard;
use linkwatch_core::error::Result;
use linkwatch_core::model::LinkRecord;
use linkwatch_core::store::LinkStore;

/// Execute the list command
pub fn execute<S: LinkStore + Sync>(cli: &Cli, dashboard: &Dashboard<S>) -> Result<()> {
    let links = dashboard.links();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(links)?);
        }
        OutputFormat::Human => {
            if links.is_empty() {
                if !cli.quiet {
                    println!("No links found");
                }
                return Ok(());
            }
            for link in links {
                println!("{}", summary_line(link));
            }
        }
    }
    Ok(())
}

/// One-line description: id, status, severity, url and source
pub fn summary_line(link: &LinkRecord) -> String {
    format!(
        "{} [{}] [{}] {} (source: {})",
        link.id, link.status, link.severity, link.url, link.source
    )
}
