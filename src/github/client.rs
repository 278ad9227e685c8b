// GitHub API HTTP client.
// Handles default headers, timeouts, rate limit headers, and status checks.

use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{CardError, Result};

use super::types::RateLimit;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Transport for GET requests against the API.
///
/// A response with a non-success status is still `Ok`; only failures to get
/// a response at all (connect, timeout, body read) are errors. Callers decide
/// what a status means through [`ApiResponse::check_status`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// GET `endpoint`, a path such as `/repos/acme/widget`.
    async fn get(&self, endpoint: &str) -> Result<ApiResponse>;
}

/// Status, rate limit headers and body text of one API response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub rate_limit: Option<RateLimit>,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            rate_limit: None,
            body: body.into(),
        }
    }

    pub fn with_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    /// Convert the status into an error the way the API uses it.
    ///
    /// 403 is always treated as rate limiting; unauthenticated clients hit
    /// that long before any permission problem.
    pub fn check_status(&self, endpoint: &str) -> Result<()> {
        match self.status {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(CardError::NotFound(endpoint.to_string())),
            StatusCode::FORBIDDEN => Err(CardError::RateLimited {
                reset_at: self.rate_limit.and_then(|rate| rate.reset_at()),
            }),
            status => Err(CardError::Http {
                status,
                body: self.body.clone(),
            }),
        }
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// GitHub API client.
pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    /// Create an unauthenticated client from the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| CardError::Other(e.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(CardError::Api)?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[async_trait]
impl ApiTransport for GitHubClient {
    async fn get(&self, endpoint: &str) -> Result<ApiResponse> {
        let url = format!("{}{}", self.api_base, endpoint);
        let response = self.client.get(&url).send().await.map_err(CardError::Api)?;

        let status = response.status();
        let rate_limit = parse_rate_limit(response.headers());
        let body = response.text().await?;

        Ok(ApiResponse {
            status,
            rate_limit,
            body,
        })
    }
}

/// Read rate limit headers. None unless the reset header is present.
fn parse_rate_limit(headers: &HeaderMap) -> Option<RateLimit> {
    let header = |name: &str| -> Option<u64> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
    };

    let reset = header("x-ratelimit-reset")?;
    Some(RateLimit {
        limit: header("x-ratelimit-limit").unwrap_or_default(),
        remaining: header("x-ratelimit-remaining").unwrap_or_default(),
        reset,
    })
}
