//! `linkwatch add` command - report a new link
//!
//! The URL is checked against every tracked link by canonical key first; a
//! match is rejected before anything is sent to the store.

use crate::cli::commands::{AddArgs, LinkFields};
use crate::cli::{Cli, OutputFormat};
use linkwatch_core::dashboard::Dashboard;
use linkwatch_core::error::Result;
use linkwatch_core::model::LinkDraft;
use linkwatch_core::store::LinkStore;

/// Execute the add command
pub fn execute<S: LinkStore + Sync>(
    cli: &Cli,
    dashboard: &mut Dashboard<S>,
    args: &AddArgs,
) -> Result<()> {
    let draft = build_draft(&args.url, &args.source, &args.fields);
    let stored = dashboard.create_link(draft)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stored)?),
        OutputFormat::Human => {
            println!("{}", stored.id);
            if !cli.quiet {
                println!("Added {}", stored.url);
            }
        }
    }
    Ok(())
}

fn build_draft(url: &str, source: &str, fields: &LinkFields) -> LinkDraft {
    let mut draft = LinkDraft::new(url, source);
    if let Some(source_type) = fields.source_type {
        draft.source_type = source_type;
    }
    if let Some(severity) = fields.severity {
        draft.severity = severity;
    }
    if let Some(status) = fields.status {
        draft.status = status;
    }
    draft.issue_type = fields.issue.clone().unwrap_or_default();
    draft.detected_by = fields.detected_by.clone().unwrap_or_default();
    draft.assigned_to = fields.assigned_to.clone().unwrap_or_default();
    draft.action_notes = fields.notes.clone().unwrap_or_default();
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkwatch_core::model::{Severity, SourceType, Status};

    #[test]
    fn test_build_draft_keeps_defaults_for_unset_fields() {
        let draft = build_draft("https://x.com/a", "src", &LinkFields::default());
        assert_eq!(draft.source_type, SourceType::Facebook);
        assert_eq!(draft.severity, Severity::Medium);
        assert_eq!(draft.status, Status::Pending);
        assert!(draft.issue_type.is_empty());
    }

    #[test]
    fn test_build_draft_applies_flags() {
        let fields = LinkFields {
            source_type: Some(SourceType::TikTok),
            severity: Some(Severity::High),
            issue: Some("defamation".to_string()),
            ..Default::default()
        };
        let draft = build_draft("https://x.com/a", "src", &fields);
        assert_eq!(draft.source_type, SourceType::TikTok);
        assert_eq!(draft.severity, Severity::High);
        assert_eq!(draft.issue_type, "defamation");
    }
}
