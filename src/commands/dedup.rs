//! `linkwatch dedup` command - delete every redundant duplicate
//!
//! The oldest report of each post is kept. Deletes run one at a time and a
//! failed delete does not stop the rest; the run reports how many succeeded
//! and failed.

use crate::cli::commands::DedupArgs;
use crate::cli::prompt::value_or_prompt;
use crate::cli::{Cli, OutputFormat};
use linkwatch_core::dashboard::Dashboard;
use linkwatch_core::dedup::find_duplicates;
use linkwatch_core::delete::{Attribution, Confirmation};
use linkwatch_core::error::Result;
use linkwatch_core::store::LinkStore;
use linkwatch_core::workflow::DedupOutcome;

/// Execute the dedup command
pub fn execute<S: LinkStore + Sync>(
    cli: &Cli,
    dashboard: &mut Dashboard<S>,
    args: &DedupArgs,
) -> Result<()> {
    let pending = find_duplicates(dashboard.links()).len();
    if pending == 0 {
        return report(cli, &DedupOutcome::NothingToDo);
    }

    if args.by.is_none() || args.confirm.is_none() {
        eprintln!("{} redundant link(s) will be deleted", pending);
    }

    let by = value_or_prompt(args.by.as_deref(), "Your name (recorded with each deletion)")?;
    let deleted_by = Attribution::new(&by)?;

    let confirmation = Confirmation::Deduplicate;
    let typed = value_or_prompt(
        args.confirm.as_deref(),
        &format!("Type {} to confirm", confirmation.phrase()),
    )?;
    confirmation.check(Some(&typed))?;

    let outcome = dashboard.deduplicate(&deleted_by);
    report(cli, &outcome)
}

fn report(cli: &Cli, outcome: &DedupOutcome) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = match outcome {
                DedupOutcome::NothingToDo => serde_json::json!({
                    "status": "nothing_to_do",
                    "succeeded": 0,
                    "failed": 0,
                    "failures": [],
                }),
                DedupOutcome::Completed(report) => serde_json::json!({
                    "status": "completed",
                    "succeeded": report.succeeded,
                    "failed": report.failed,
                    "failures": report.failures,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match outcome {
            DedupOutcome::NothingToDo => {
                if !cli.quiet {
                    println!("No duplicates found");
                }
            }
            DedupOutcome::Completed(report) => {
                println!(
                    "Deleted {} duplicate(s), {} failed",
                    report.succeeded, report.failed
                );
                for failure in &report.failures {
                    eprintln!("  {} {}: {}", failure.link_id, failure.url, failure.error);
                }
            }
        },
    }
    Ok(())
}
