//! `linkwatch update` command - edit a tracked link
//!
//! Only the given fields change. The id and detection time never do.

use crate::cli::commands::UpdateArgs;
use crate::cli::{Cli, OutputFormat};
use linkwatch_core::dashboard::Dashboard;
use linkwatch_core::error::{LinkwatchError, Result};
use linkwatch_core::model::LinkRecord;
use linkwatch_core::store::LinkStore;

/// Execute the update command
pub fn execute<S: LinkStore + Sync>(
    cli: &Cli,
    dashboard: &mut Dashboard<S>,
    args: &UpdateArgs,
) -> Result<()> {
    let current = dashboard
        .state()
        .link(&args.id)
        .cloned()
        .ok_or_else(|| LinkwatchError::not_found("link", &args.id))?;

    let edited = apply_changes(current, args);
    let stored = dashboard.update_link(edited)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stored)?),
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Updated {}", stored.id);
            }
        }
    }
    Ok(())
}

fn apply_changes(mut link: LinkRecord, args: &UpdateArgs) -> LinkRecord {
    if let Some(url) = &args.url {
        link.url = url.trim().to_string();
    }
    if let Some(source) = &args.source {
        link.source = source.trim().to_string();
    }

    let fields = &args.fields;
    if let Some(source_type) = fields.source_type {
        link.source_type = source_type;
    }
    if let Some(severity) = fields.severity {
        link.severity = severity;
    }
    if let Some(status) = fields.status {
        link.status = status;
    }
    if let Some(issue) = &fields.issue {
        link.issue_type = issue.clone();
    }
    if let Some(detected_by) = &fields.detected_by {
        link.detected_by = detected_by.clone();
    }
    if let Some(assigned_to) = &fields.assigned_to {
        link.assigned_to = assigned_to.clone();
    }
    if let Some(notes) = &fields.notes {
        link.action_notes = notes.clone();
    }
    link
}
