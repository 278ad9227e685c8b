// Error types for repo-cards.
// Covers GitHub API failures, decoding errors, and general errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {}", .reset_at.as_deref().unwrap_or("unknown"))]
    RateLimited { reset_at: Option<String> },

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CardError>;
