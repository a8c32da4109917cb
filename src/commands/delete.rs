//! `linkwatch delete` command - delete one link
//!
//! Asks for a name to record with the deletion and the exact phrase
//! `DELETE` before anything is sent to the store. Either flag may be given
//! up front instead.

use crate::cli::commands::DeleteArgs;
use crate::cli::prompt::value_or_prompt;
use crate::cli::{Cli, OutputFormat};
use linkwatch_core::dashboard::Dashboard;
use linkwatch_core::delete::{Attribution, Confirmation};
use linkwatch_core::error::{LinkwatchError, Result};
use linkwatch_core::store::LinkStore;

use super::list::summary_line;

/// Execute the delete command
pub fn execute<S: LinkStore + Sync>(
    cli: &Cli,
    dashboard: &mut Dashboard<S>,
    args: &DeleteArgs,
) -> Result<()> {
    let target = dashboard
        .state()
        .link(&args.id)
        .cloned()
        .ok_or_else(|| LinkwatchError::not_found("link", &args.id))?;

    if args.by.is_none() || args.confirm.is_none() {
        eprintln!("About to delete: {}", summary_line(&target));
    }

    let by = value_or_prompt(args.by.as_deref(), "Your name (recorded with the deletion)")?;
    let deleted_by = Attribution::new(&by)?;

    let confirmation = Confirmation::Delete;
    let typed = value_or_prompt(
        args.confirm.as_deref(),
        &format!("Type {} to confirm", confirmation.phrase()),
    )?;
    confirmation.check(Some(&typed))?;

    let removed = dashboard.delete_link(&args.id, &deleted_by)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "deleted": removed,
                "deleted_by": deleted_by.as_str(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted {} ({})", removed.id, removed.url);
            }
        }
    }
    Ok(())
}
