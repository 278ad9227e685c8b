// repo-cards: GitHub repository stats for project cards.
// Parses card links, fetches and caches repository data, and paints cards.

pub mod cache;
pub mod card;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod github;
pub mod loader;
pub mod readme;
pub mod ui;

pub use cache::TtlCache;
pub use card::{Card, MemoryCard, StatItem, render};
pub use config::Config;
pub use error::{CardError, Result};
pub use fetcher::{FetchOutcome, RepositoryData, RepositoryFetcher};
pub use format::format_number;
pub use github::{ApiTransport, GitHubClient, RepoId};
pub use loader::{CardLoader, CardOutcome, LoadReport};
pub use readme::extract_title;
