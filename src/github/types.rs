// GitHub API response types.
// Defines structs for deserializing repository and readme responses.

use serde::{Deserialize, Serialize};

/// GitHub repository, limited to the fields a card displays.
///
/// Every field is optional so a sparse or partial record still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub html_url: Option<String>,
}

/// Readme resource. `content` is base64 text, wrapped at 60 columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readme {
    pub content: String,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl Readme {
    /// GitHub answers `"none"` instead of base64 for files over 1 MB.
    /// A missing encoding is taken as base64.
    pub fn is_base64(&self) -> bool {
        self.encoding.as_deref().is_none_or(|e| e == "base64")
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

impl RateLimit {
    /// Format the reset timestamp as a wall-clock time (UTC).
    pub fn reset_at(&self) -> Option<String> {
        chrono::DateTime::from_timestamp(self.reset as i64, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
    }
}
