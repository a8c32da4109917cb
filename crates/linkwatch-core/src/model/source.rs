use serde::{Deserialize, Serialize};

/// Classification given to sources created automatically ("undetermined")
pub const UNDETERMINED_SOURCE_TYPE: &str = "Chưa xác định";

/// Note attached to sources created automatically ("added by the system")
pub const AUTO_SOURCE_NOTE: &str = "Tự động thêm vào hệ thống.";

/// Aggregate intelligence about an account, page or outlet that posts negative content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// The canonical handle for the source
    #[serde(default)]
    pub profile_url: String,
    #[serde(default)]
    pub negative_post_count: u32,
    #[serde(rename = "type", default = "undetermined")]
    pub source_type: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub suspicious: bool,
}

fn undetermined() -> String {
    UNDETERMINED_SOURCE_TYPE.to_string()
}

impl SourceRecord {
    /// A freshly discovered source with one attributed post
    pub fn discovered(id: String, profile_url: &str) -> Self {
        SourceRecord {
            id,
            name: profile_url.to_string(),
            profile_url: profile_url.to_string(),
            negative_post_count: 1,
            source_type: undetermined(),
            notes: AUTO_SOURCE_NOTE.to_string(),
            suspicious: false,
        }
    }

    /// Name to show, falling back to the profile URL
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.profile_url
        } else {
            &self.name
        }
    }
}
