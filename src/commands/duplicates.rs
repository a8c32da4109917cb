//! `linkwatch duplicates` command - report duplicate groups, read-only

use crate::cli::{Cli, OutputFormat};
use linkwatch_core::dashboard::Dashboard;
use linkwatch_core::dedup::find_duplicate_groups;
use linkwatch_core::error::Result;
use linkwatch_core::store::LinkStore;

/// Execute the duplicates command
pub fn execute<S: LinkStore + Sync>(cli: &Cli, dashboard: &Dashboard<S>) -> Result<()> {
    let groups = find_duplicate_groups(dashboard.links());

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = groups
                .iter()
                .map(|group| {
                    serde_json::json!({
                        "canonical": group.key,
                        "kept": group.kept,
                        "redundant": group.redundant,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if groups.is_empty() {
                if !cli.quiet {
                    println!("No duplicates found");
                }
                return Ok(());
            }
            for group in &groups {
                println!("{}", group.key);
                println!("  keep   {} ({})", group.kept.id, group.kept.detected_at);
                for record in &group.redundant {
                    println!("  remove {} ({})", record.id, record.detected_at);
                }
            }
            if !cli.quiet {
                let total: usize = groups.iter().map(|g| g.redundant.len()).sum();
                println!();
                println!("{} redundant link(s) in {} group(s)", total, groups.len());
            }
        }
    }
    Ok(())
}
