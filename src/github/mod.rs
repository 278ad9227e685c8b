// GitHub API module.
// Provides the client, endpoints, URL parsing and response types.

pub mod client;
pub mod endpoints;
pub mod types;
pub mod url;

pub use client::{ApiResponse, ApiTransport, GitHubClient};
pub use types::*;
pub use url::RepoId;
