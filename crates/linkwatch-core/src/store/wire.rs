//! Request and response shapes of the store's web endpoint

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LinkwatchError, Result};
use crate::model::LinkRecord;

/// Longest raw body excerpt carried in an error message
const MAX_BODY_EXCERPT: usize = 200;

/// Operation selector sent as `action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StoreAction {
    GetLinks,
    GetSources,
    AddLink,
    UpdateLink,
    DeleteLink,
}

impl StoreAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreAction::GetLinks => "getLinks",
            StoreAction::GetSources => "getSources",
            StoreAction::AddLink => "addLink",
            StoreAction::UpdateLink => "updateLink",
            StoreAction::DeleteLink => "deleteLink",
        }
    }
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of every write: `{"action": ..., "payload": ...}`
#[derive(Debug, Serialize)]
pub(crate) struct WriteRequest<P: Serialize> {
    pub action: StoreAction,
    pub payload: P,
}

/// Delete payload: the full record plus the audit attribution
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeletePayload<'a> {
    #[serde(flatten)]
    pub link: &'a LinkRecord,
    pub deleted_by: &'a str,
}

/// Envelope the endpoint may wrap write results in
#[derive(Debug, Default, Deserialize)]
struct WriteResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

/// Decode a read response. Anything other than a JSON array reads as empty.
pub(crate) fn parse_collection<T: DeserializeOwned>(action: StoreAction, body: &str) -> Vec<T> {
    let items = match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            tracing::warn!(action = %action, kind = json_kind(&other), "non_array_response");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(action = %action, error = %e, "unparsable_response");
            return Vec::new();
        }
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(row, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(action = %action, row, error = %e, "skipping_malformed_row");
                None
            }
        })
        .collect();

    tracing::debug!(action = %action, total, kept = records.len(), "read_collection");
    records
}

/// Check a write response, returning the `data` member when one is present
pub(crate) fn check_write(action: StoreAction, status: u16, body: &str) -> Result<Option<Value>> {
    let envelope = serde_json::from_str::<WriteResponse>(body).ok();

    if !(200..300).contains(&status) {
        let message = envelope
            .as_ref()
            .and_then(WriteResponse::reason)
            .unwrap_or_else(|| excerpt(body, status));
        return Err(LinkwatchError::store(action.as_str(), Some(status), message));
    }

    let Some(envelope) = envelope else {
        return Ok(None);
    };

    let failed = envelope
        .status
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case("error"));
    if failed {
        let message = envelope
            .reason()
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(LinkwatchError::store(action.as_str(), Some(status), message));
    }

    Ok(envelope.data)
}

impl WriteResponse {
    fn reason(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .filter(|m| !m.trim().is_empty())
    }
}

fn excerpt(body: &str, status: u16) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("empty response (status {})", status);
    }
    trimmed.chars().take(MAX_BODY_EXCERPT).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
