// Repository data fetcher.
// Fetches metadata and readme in parallel, merges them, and caches the result.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, error, warn};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{CardError, Result};
use crate::github::endpoints::{get_readme, get_repo};
use crate::github::{ApiTransport, GitHubClient, Readme, RepoId, Repository};
use crate::readme::extract_title;

/// Repository record merged with the title found in its readme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryData {
    pub repository: Repository,
    /// First heading of the readme. Never an empty string.
    pub readme_title: Option<String>,
}

/// Result of fetching one repository.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Data from the network or the cache.
    Loaded(RepositoryData),
    /// The API refused the metadata request because of rate limiting.
    RateLimited { reset_at: Option<String> },
    /// The metadata request failed for any other reason.
    Failed(CardError),
}

impl FetchOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded(_))
    }

    pub fn into_data(self) -> Option<RepositoryData> {
        match self {
            FetchOutcome::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Fetches repository data through a transport, with a session cache.
///
/// The cache lives as long as the fetcher. Concurrent fetches of the same
/// repository are serialized per key, so only the first one goes to the
/// network and the rest are served from the cache.
pub struct RepositoryFetcher<T: ApiTransport = GitHubClient> {
    transport: T,
    cache: Mutex<TtlCache<RepositoryData>>,
    in_flight: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl RepositoryFetcher<GitHubClient> {
    /// Create a fetcher backed by the GitHub API.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(GitHubClient::new(config)?, config.cache_ttl))
    }
}

impl<T: ApiTransport> RepositoryFetcher<T> {
    pub fn new(transport: T, ttl: Duration) -> Self {
        Self::with_cache(transport, TtlCache::new(ttl))
    }

    /// Create a fetcher around an existing cache.
    pub fn with_cache(transport: T, cache: TtlCache<RepositoryData>) -> Self {
        Self {
            transport,
            cache: Mutex::new(cache),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Cached data for `id`, if present and not expired.
    pub fn cached(&self, id: &RepoId) -> Option<RepositoryData> {
        self.cached_by_key(&id.cache_key())
    }

    /// Fetch data for one repository.
    ///
    /// Never fails outright: rate limiting and errors come back as
    /// [`FetchOutcome`] variants after being logged. Problems with the readme
    /// only cost the title.
    pub async fn fetch(&self, id: &RepoId) -> FetchOutcome {
        let key = id.cache_key();
        if let Some(data) = self.cached_by_key(&key) {
            debug!(owner = %id.owner, repo = %id.name, "Cache hit");
            return FetchOutcome::Loaded(data);
        }

        let key_lock = self.key_lock(&key);
        let _guard = key_lock.lock().await;

        // Another fetch of this key may have completed while we waited.
        if let Some(data) = self.cached_by_key(&key) {
            debug!(owner = %id.owner, repo = %id.name, "Cache filled while waiting");
            return FetchOutcome::Loaded(data);
        }

        let (repository, readme) = tokio::join!(
            get_repo(&self.transport, id),
            get_readme(&self.transport, id)
        );

        let repository = match repository {
            Ok(repository) => repository,
            Err(CardError::RateLimited { reset_at }) => {
                warn!(
                    owner = %id.owner,
                    repo = %id.name,
                    reset_at = reset_at.as_deref().unwrap_or("unknown"),
                    "GitHub API rate limit reached, leaving card as is"
                );
                return FetchOutcome::RateLimited { reset_at };
            }
            Err(err) => {
                error!(owner = %id.owner, repo = %id.name, error = %err, "Failed to fetch repository");
                return FetchOutcome::Failed(err);
            }
        };

        let data = RepositoryData {
            repository,
            readme_title: readme_title(id, readme),
        };

        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set(key, data.clone());

        FetchOutcome::Loaded(data)
    }

    fn cached_by_key(&self, key: &str) -> Option<RepositoryData> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn key_lock(&self, key: &str) -> Arc<AsyncMutex<()>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.to_string())
            .or_default()
            .clone()
    }
}

/// Title from a readme response. Every failure here degrades to None.
fn readme_title(id: &RepoId, readme: Result<Readme>) -> Option<String> {
    match readme {
        Ok(readme) if !readme.is_base64() => {
            debug!(
                owner = %id.owner,
                repo = %id.name,
                encoding = readme.encoding.as_deref().unwrap_or_default(),
                "Readme content is not base64, skipping title"
            );
            None
        }
        Ok(readme) => {
            let title = extract_title(&readme.content);
            if title.is_none() {
                debug!(owner = %id.owner, repo = %id.name, "No title found in readme");
            }
            title
        }
        Err(CardError::NotFound(_)) => {
            debug!(owner = %id.owner, repo = %id.name, "Repository has no readme");
            None
        }
        Err(err) => {
            warn!(owner = %id.owner, repo = %id.name, error = %err, "Could not load readme");
            None
        }
    }
}
