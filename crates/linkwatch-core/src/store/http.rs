//! HTTP client for the store's web endpoint
//!
//! Reads are `GET {endpoint}?action=...`; writes are a single `POST {endpoint}`
//! entry point with the action named in the JSON body. Requests carry no
//! timeout unless one is configured.

use std::time::{Duration, Instant};

use serde::Serialize;
use ureq::Agent;

use super::wire::{check_write, parse_collection, DeletePayload, StoreAction, WriteRequest};
use super::LinkStore;
use crate::delete::Attribution;
use crate::error::{LinkwatchError, Result};
use crate::model::{LinkRecord, SourceRecord};
use crate::trace_time;

/// Client for a spreadsheet-backed web endpoint
pub struct HttpStore {
    endpoint: String,
    agent: Agent,
    user_agent: String,
}

impl std::fmt::Debug for HttpStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpStore")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl HttpStore {
    /// Create a client for `endpoint`, with an optional per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let config = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build();

        Self {
            endpoint: endpoint.into(),
            agent: config.into(),
            user_agent: format!(
                "linkwatch/{} ({})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn read(&self, action: StoreAction) -> Result<String> {
        let start = Instant::now();
        let mut response = self
            .agent
            .get(self.endpoint.as_str())
            .query("action", action.as_str())
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| LinkwatchError::transport(action.as_str(), e))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| LinkwatchError::transport(action.as_str(), e))?;
        trace_time!(start, "store_read", action = action.as_str(), status = status);

        if !(200..300).contains(&status) {
            return Err(LinkwatchError::store(
                action.as_str(),
                Some(status),
                body.trim().chars().take(200).collect::<String>(),
            ));
        }
        Ok(body)
    }

    fn write<P: Serialize>(
        &self,
        action: StoreAction,
        payload: P,
    ) -> Result<Option<serde_json::Value>> {
        let start = Instant::now();
        let body = serde_json::to_string(&WriteRequest { action, payload })?;

        let mut response = self
            .agent
            .post(self.endpoint.as_str())
            .header("Content-Type", "application/json")
            .header("User-Agent", self.user_agent.as_str())
            .send(body.as_str())
            .map_err(|e| LinkwatchError::transport(action.as_str(), e))?;

        let status = response.status().as_u16();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| LinkwatchError::transport(action.as_str(), e))?;
        trace_time!(start, "store_write", action = action.as_str(), status = status);

        check_write(action, status, &text)
    }

    /// Use the echoed record when the endpoint returns one
    fn stored_record(data: Option<serde_json::Value>, sent: &LinkRecord) -> LinkRecord {
        data.and_then(|value| serde_json::from_value::<LinkRecord>(value).ok())
            .filter(|record| !record.url.is_empty())
            .unwrap_or_else(|| sent.clone())
    }
}

impl LinkStore for HttpStore {
    fn get_links(&self) -> Result<Vec<LinkRecord>> {
        let body = self.read(StoreAction::GetLinks)?;
        Ok(parse_collection(StoreAction::GetLinks, &body))
    }

    fn get_sources(&self) -> Result<Vec<SourceRecord>> {
        let body = self.read(StoreAction::GetSources)?;
        Ok(parse_collection(StoreAction::GetSources, &body))
    }

    fn add_link(&self, link: &LinkRecord) -> Result<LinkRecord> {
        let data = self.write(StoreAction::AddLink, link)?;
        Ok(Self::stored_record(data, link))
    }

    fn update_link(&self, link: &LinkRecord) -> Result<LinkRecord> {
        let data = self.write(StoreAction::UpdateLink, link)?;
        Ok(Self::stored_record(data, link))
    }

    fn delete_link(&self, link: &LinkRecord, deleted_by: &Attribution) -> Result<()> {
        self.write(
            StoreAction::DeleteLink,
            DeletePayload {
                link,
                deleted_by: deleted_by.as_str(),
            },
        )?;
        Ok(())
    }
}
