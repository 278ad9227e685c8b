// Card loading loop.
// Walks cards in order, drives the loading indicator, and renders fetched data.

use tracing::{debug, info};

use crate::card::{Card, render};
use crate::config::Config;
use crate::error::Result;
use crate::fetcher::{FetchOutcome, RepositoryFetcher};
use crate::github::{ApiTransport, GitHubClient, RepoId};

/// What happened to one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    /// The card has no recognizable GitHub link and was left alone.
    Skipped,
    /// Data was fetched (or cached) and painted onto the card.
    Rendered(RepoId),
    /// The API was rate limiting; the card keeps its default markup.
    RateLimited(RepoId),
    /// Fetching failed; the card keeps its default markup.
    Failed(RepoId),
}

/// Tally of a `load_all` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rendered: usize,
    pub skipped: usize,
    pub rate_limited: usize,
    pub failed: usize,
}

impl LoadReport {
    fn record(&mut self, outcome: &CardOutcome) {
        match outcome {
            CardOutcome::Skipped => self.skipped += 1,
            CardOutcome::Rendered(_) => self.rendered += 1,
            CardOutcome::RateLimited(_) => self.rate_limited += 1,
            CardOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.rendered + self.skipped + self.rate_limited + self.failed
    }
}

/// Augments project cards with repository data, one page load at a time.
pub struct CardLoader<T: ApiTransport = GitHubClient> {
    fetcher: RepositoryFetcher<T>,
}

impl CardLoader<GitHubClient> {
    /// Create a loader talking to the GitHub API with a fresh cache.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(RepositoryFetcher::from_config(config)?))
    }
}

impl<T: ApiTransport> CardLoader<T> {
    pub fn new(fetcher: RepositoryFetcher<T>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &RepositoryFetcher<T> {
        &self.fetcher
    }

    /// Load every card, in the order given.
    ///
    /// Cards are independent: a failure on one leaves the others untouched.
    pub async fn load_all<'c, C, I>(&self, cards: I) -> LoadReport
    where
        C: Card + ?Sized + 'c,
        I: IntoIterator<Item = &'c mut C>,
    {
        let mut report = LoadReport::default();
        for card in cards {
            let outcome = self.load_card(card).await;
            report.record(&outcome);
        }

        info!(
            rendered = report.rendered,
            skipped = report.skipped,
            rate_limited = report.rate_limited,
            failed = report.failed,
            "Finished loading project cards"
        );
        report
    }

    /// Load a single card.
    ///
    /// The loading indicator is shown before the fetch and removed after it
    /// whatever the result. Only successful data is rendered.
    pub async fn load_card<C: Card + ?Sized>(&self, card: &mut C) -> CardOutcome {
        let Some(id) = card.link().as_deref().and_then(RepoId::parse) else {
            debug!("Card has no GitHub link, skipping");
            return CardOutcome::Skipped;
        };

        card.show_loading();
        let outcome = self.fetcher.fetch(&id).await;
        card.hide_loading();

        match outcome {
            FetchOutcome::Loaded(data) => {
                render(card, &data);
                CardOutcome::Rendered(id)
            }
            FetchOutcome::RateLimited { .. } => CardOutcome::RateLimited(id),
            FetchOutcome::Failed(_) => CardOutcome::Failed(id),
        }
    }
}
