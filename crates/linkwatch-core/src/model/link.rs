use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LinkwatchError, Result};

/// Where a reported post was published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceType {
    #[default]
    Facebook,
    TikTok,
    Page,
    Group,
    YouTube,
    Media,
    #[serde(rename = "Cá nhân", alias = "Personal")]
    Personal,
    #[serde(rename = "Khác", alias = "Other")]
    Other,
}

impl SourceType {
    /// All accepted CLI spellings
    pub const VALID_TYPES: &'static [&'static str] = &[
        "facebook", "tiktok", "page", "group", "youtube", "media", "personal", "other",
    ];

    /// Label stored by the remote sheet
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Facebook => "Facebook",
            SourceType::TikTok => "TikTok",
            SourceType::Page => "Page",
            SourceType::Group => "Group",
            SourceType::YouTube => "YouTube",
            SourceType::Media => "Media",
            SourceType::Personal => "Cá nhân",
            SourceType::Other => "Khác",
        }
    }
}

impl FromStr for SourceType {
    type Err = LinkwatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "facebook" => Ok(SourceType::Facebook),
            "tiktok" => Ok(SourceType::TikTok),
            "page" => Ok(SourceType::Page),
            "group" => Ok(SourceType::Group),
            "youtube" => Ok(SourceType::YouTube),
            "media" => Ok(SourceType::Media),
            "personal" | "cá nhân" => Ok(SourceType::Personal),
            "other" | "khác" => Ok(SourceType::Other),
            other => Err(LinkwatchError::invalid_value(
                "source type",
                format!("{} (expected: {})", other, Self::VALID_TYPES.join(", ")),
            )),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How harmful a reported post is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "Thấp", alias = "Low")]
    Low,
    #[default]
    #[serde(rename = "Trung bình", alias = "Medium")]
    Medium,
    #[serde(rename = "Cao", alias = "High")]
    High,
}

impl Severity {
    pub const VALID_LEVELS: &'static [&'static str] = &["low", "medium", "high"];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Thấp",
            Severity::Medium => "Trung bình",
            Severity::High => "Cao",
        }
    }
}

impl FromStr for Severity {
    type Err = LinkwatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "thấp" => Ok(Severity::Low),
            "medium" | "trung bình" => Ok(Severity::Medium),
            "high" | "cao" => Ok(Severity::High),
            other => Err(LinkwatchError::invalid_value(
                "severity",
                format!("{} (expected: {})", other, Self::VALID_LEVELS.join(", ")),
            )),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Handling status of a reported post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "Chưa xử lý", alias = "Pending")]
    Pending,
    #[serde(rename = "Đang xử lý", alias = "InProgress")]
    InProgress,
    #[serde(rename = "Đã xử lý", alias = "Done")]
    Done,
}

impl Status {
    pub const VALID_STATUSES: &'static [&'static str] = &["pending", "in-progress", "done"];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Chưa xử lý",
            Status::InProgress => "Đang xử lý",
            Status::Done => "Đã xử lý",
        }
    }
}

impl FromStr for Status {
    type Err = LinkwatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "chưa xử lý" => Ok(Status::Pending),
            "in-progress" | "inprogress" | "đang xử lý" => Ok(Status::InProgress),
            "done" | "đã xử lý" => Ok(Status::Done),
            other => Err(LinkwatchError::invalid_value(
                "status",
                format!("{} (expected: {})", other, Self::VALID_STATUSES.join(", ")),
            )),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported negative post, as held by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// Store-assigned identifier (empty before the first save)
    #[serde(default)]
    pub id: String,
    /// Post URL as submitted
    #[serde(default)]
    pub url: String,
    /// Profile/page/group URL or free text naming the poster
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_type: SourceType,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub issue_type: String,
    #[serde(default)]
    pub detected_by: String,
    /// ISO-8601 timestamp assigned at creation; never changed afterwards
    #[serde(default)]
    pub detected_at: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub action_notes: String,
}

impl LinkRecord {
    /// Parse `detected_at` as an instant.
    ///
    /// Accepts RFC 3339 and zone-less `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC).
    /// Returns `None` for anything else.
    pub fn detected_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.detected_at)
    }

    /// True once the store has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// Check the fields every persisted record must carry
    pub fn validate(&self) -> Result<()> {
        require_field("url", &self.url)?;
        require_field("source", &self.source)
    }
}

/// A user submission for a new link (no id or detection time yet)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub url: String,
    pub source: String,
    pub source_type: SourceType,
    pub severity: Severity,
    pub issue_type: String,
    pub detected_by: String,
    pub assigned_to: String,
    pub status: Status,
    pub action_notes: String,
}

impl LinkDraft {
    pub fn new(url: impl Into<String>, source: impl Into<String>) -> Self {
        LinkDraft {
            url: url.into(),
            source: source.into(),
            ..Default::default()
        }
    }

    /// Reject drafts missing a URL or a source
    pub fn validate(&self) -> Result<()> {
        require_field("url", &self.url)?;
        require_field("source", &self.source)
    }

    /// Turn the draft into an unsaved record stamped with `detected_at`
    pub fn into_record(self, detected_at: DateTime<Utc>) -> LinkRecord {
        LinkRecord {
            id: String::new(),
            url: self.url.trim().to_string(),
            source: self.source.trim().to_string(),
            source_type: self.source_type,
            severity: self.severity,
            issue_type: self.issue_type,
            detected_by: self.detected_by,
            detected_at: detected_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            assigned_to: self.assigned_to,
            status: self.status,
            action_notes: self.action_notes,
        }
    }
}

fn require_field(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LinkwatchError::missing_field(field));
    }
    Ok(())
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
