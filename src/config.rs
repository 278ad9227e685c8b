// Client configuration.
// API base, user agent, cache lifetime and request timeout, with defaults.

use std::time::Duration;

use serde::Deserialize;
use serde_with::{DurationSeconds, serde_as};

use crate::cache::DEFAULT_TTL;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "repo-cards";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the GitHub client and the repository cache.
///
/// Deserializable so a host can nest it in its own configuration; missing
/// fields take their defaults and durations are whole seconds.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL the `/repos/...` endpoints are appended to.
    pub api_base: String,
    pub user_agent: String,
    /// How long a fetched repository stays valid in the cache.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub cache_ttl: Duration,
    /// Upper bound on a single request, including the body download.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: GITHUB_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_ttl: DEFAULT_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"cache_ttl": 60, "user_agent": "portfolio"}"#).unwrap();
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.user_agent, "portfolio");
        assert_eq!(config.api_base, GITHUB_API_BASE);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        let config = Config::default().with_api_base("http://localhost:8080/");
        assert_eq!(config.api_base, "http://localhost:8080");
    }
}
