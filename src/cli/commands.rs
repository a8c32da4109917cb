//! Top-level commands and their arguments

use clap::{Args, Subcommand};

use crate::cli::parse::{parse_severity, parse_source_type, parse_status};
use linkwatch_core::model::{Severity, SourceType, Status};

/// Top-level linkwatch commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical key of one or more URLs
    Normalize(NormalizeArgs),

    /// List tracked links
    List,

    /// List known sources, most negative posts first
    Sources,

    /// Report a new link
    Add(AddArgs),

    /// Edit a tracked link
    Update(UpdateArgs),

    /// Delete one link (requires attribution and confirmation)
    Delete(DeleteArgs),

    /// Show duplicate groups without changing anything
    Duplicates,

    /// Delete every redundant duplicate, keeping the oldest report
    Dedup(DedupArgs),
}

/// Arguments for the normalize command.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// URLs to canonicalize
    #[arg(required = true)]
    pub urls: Vec<String>,
}

/// Fields a user can set on a link.
#[derive(Args, Debug, Default)]
pub struct LinkFields {
    /// Where the post was published
    /// (facebook, tiktok, page, group, youtube, media, personal, other)
    #[arg(long = "type", short = 'T', value_parser = parse_source_type)]
    pub source_type: Option<SourceType>,

    /// How harmful the post is (low, medium, high)
    #[arg(long, value_parser = parse_severity)]
    pub severity: Option<Severity>,

    /// Kind of issue (free text)
    #[arg(long)]
    pub issue: Option<String>,

    /// Who found the post
    #[arg(long)]
    pub detected_by: Option<String>,

    /// Who is handling it
    #[arg(long)]
    pub assigned_to: Option<String>,

    /// Handling status (pending, in-progress, done)
    #[arg(long, value_parser = parse_status)]
    pub status: Option<Status>,

    /// Notes on actions taken
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for the add command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Post URL
    pub url: String,

    /// Profile URL or name of the poster
    #[arg(long, short)]
    pub source: String,

    #[command(flatten)]
    pub fields: LinkFields,
}

/// Arguments for the update command.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Link ID
    pub id: String,

    /// New post URL
    #[arg(long)]
    pub url: Option<String>,

    /// New source
    #[arg(long, short)]
    pub source: Option<String>,

    #[command(flatten)]
    pub fields: LinkFields,
}

/// Arguments for the delete command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Link ID
    pub id: String,

    /// Name recorded with the deletion (prompted for if omitted)
    #[arg(long)]
    pub by: Option<String>,

    /// Confirmation phrase, DELETE (prompted for if omitted)
    #[arg(long)]
    pub confirm: Option<String>,
}

/// Arguments for the dedup command.
#[derive(Args, Debug)]
pub struct DedupArgs {
    /// Name recorded with every deletion (prompted for if omitted)
    #[arg(long)]
    pub by: Option<String>,

    /// Confirmation phrase, DEDUPLICATE (prompted for if omitted)
    #[arg(long)]
    pub confirm: Option<String>,
}
