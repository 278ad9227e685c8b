// Cache module for fetched repository data.
// Keeps API results in memory for the lifetime of one session.

pub mod store;

pub use store::{CacheEntry, DEFAULT_TTL, TtlCache};
