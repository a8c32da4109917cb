//! Error types and exit codes for linkwatch
//!
//! Exit codes:
//! - 0: Success (also used for a cancelled delete)
//! - 1: Generic failure (store or transport)
//! - 2: Usage error (bad flags/args, missing required fields)
//! - 3: Data error (duplicate link, unknown record, bad store file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the linkwatch CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or invalid input (2)
    Usage = 2,
    /// Data error - duplicates, missing records, bad store file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during linkwatch operations
#[derive(Error, Debug)]
pub enum LinkwatchError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("{field} is required")]
    MissingField { field: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("link already tracked as {existing_id}: {url} (matches {canonical})")]
    DuplicateUrl {
        url: String,
        canonical: String,
        existing_id: String,
    },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid store file {path:?}: {reason}")]
    InvalidStoreFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("store rejected {operation}{}: {message}", status_suffix(.status))]
    Store {
        operation: String,
        status: Option<u16>,
        message: String,
    },

    #[error("failed to reach store for {operation}: {reason}")]
    Transport { operation: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),

    /// The user declined or mistyped a confirmation; not a failure
    #[error("cancelled: {0}")]
    Cancelled(String),
}

impl LinkwatchError {
    /// Create an error for a missing required field
    pub fn missing_field(field: &str) -> Self {
        LinkwatchError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        LinkwatchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        LinkwatchError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a non-success store response
    pub fn store(operation: &str, status: Option<u16>, message: impl std::fmt::Display) -> Self {
        LinkwatchError::Store {
            operation: operation.to_string(),
            status,
            message: message.to_string(),
        }
    }

    /// Create an error for a failed network round trip
    pub fn transport(operation: &str, error: impl std::fmt::Display) -> Self {
        LinkwatchError::Transport {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create a clean cancellation
    pub fn cancelled(reason: impl Into<String>) -> Self {
        LinkwatchError::Cancelled(reason.into())
    }

    /// True when the error is a user cancellation rather than a failure
    pub fn is_cancellation(&self) -> bool {
        matches!(self, LinkwatchError::Cancelled(_))
    }

    /// True when the error was raised before any store call was made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LinkwatchError::MissingField { .. }
                | LinkwatchError::InvalidValue { .. }
                | LinkwatchError::DuplicateUrl { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LinkwatchError::UnknownFormat(_)
            | LinkwatchError::UsageError(_)
            | LinkwatchError::MissingField { .. }
            | LinkwatchError::InvalidValue { .. } => ExitCode::Usage,

            LinkwatchError::DuplicateUrl { .. }
            | LinkwatchError::NotFound { .. }
            | LinkwatchError::InvalidStoreFile { .. } => ExitCode::Data,

            LinkwatchError::Store { .. }
            | LinkwatchError::Transport { .. }
            | LinkwatchError::Io(_)
            | LinkwatchError::Json(_)
            | LinkwatchError::Toml(_)
            | LinkwatchError::Other(_) => ExitCode::Failure,

            LinkwatchError::Cancelled(_) => ExitCode::Success,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            LinkwatchError::UnknownFormat(_) => "unknown_format",
            LinkwatchError::UsageError(_) => "usage_error",
            LinkwatchError::MissingField { .. } => "missing_field",
            LinkwatchError::InvalidValue { .. } => "invalid_value",
            LinkwatchError::DuplicateUrl { .. } => "duplicate_url",
            LinkwatchError::NotFound { .. } => "not_found",
            LinkwatchError::InvalidStoreFile { .. } => "invalid_store_file",
            LinkwatchError::Store { .. } => "store_error",
            LinkwatchError::Transport { .. } => "transport_error",
            LinkwatchError::Io(_) => "io_error",
            LinkwatchError::Json(_) => "json_error",
            LinkwatchError::Toml(_) => "toml_error",
            LinkwatchError::Other(_) => "other",
            LinkwatchError::Cancelled(_) => "cancelled",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            LinkwatchError::DuplicateUrl {
                canonical,
                existing_id,
                ..
            } => {
                error_obj["canonical"] = serde_json::json!(canonical);
                error_obj["existing_id"] = serde_json::json!(existing_id);
            }
            LinkwatchError::Store { status, .. } => {
                error_obj["status"] = serde_json::json!(status);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

/// Result type alias for linkwatch operations
pub type Result<T> = std::result::Result<T, LinkwatchError>;
