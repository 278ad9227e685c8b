// In-memory cache store with lazy TTL expiry.
// Entries are checked on read and overwritten on write; nothing is swept.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Default TTL for repository data: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Cached value with the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value.
    pub payload: V,
    /// When the value was stored.
    pub stored_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// Create an entry stamped at `now`.
    pub fn new(payload: V, now: DateTime<Utc>) -> Self {
        Self {
            payload,
            stored_at: now,
        }
    }

    /// Check if this entry has expired at `now`.
    ///
    /// An entry is valid while strictly less than `ttl` has elapsed. A clock
    /// that went backwards counts as zero elapsed time.
    pub fn is_expired_at(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        let elapsed = now
            .signed_duration_since(self.stored_at)
            .to_std()
            .unwrap_or(Duration::ZERO);

        elapsed >= ttl
    }

    /// Check if this entry is still valid at `now`.
    pub fn is_valid_at(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        !self.is_expired_at(ttl, now)
    }
}

/// Keyed store with one fixed time-to-live.
///
/// Expired entries behave as misses but stay in place until the next `set`
/// for the same key overwrites them. Not synchronized; wrap it in a lock to
/// share it.
#[derive(Debug, Clone)]
pub struct TtlCache<V> {
    ttl: Duration,
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<V> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a value, returning None if absent or expired.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_at(key, Utc::now())
    }

    /// Look up a value as of `now`.
    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<&V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_valid_at(self.ttl, now) => Some(&entry.payload),
            _ => None,
        }
    }

    /// Store a value, replacing any previous entry and restarting its clock.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.set_at(key, value, Utc::now());
    }

    /// Store a value stamped at `now`.
    pub fn set_at(&mut self, key: impl Into<String>, value: V, now: DateTime<Utc>) {
        self.entries.insert(key.into(), CacheEntry::new(value, now));
    }

    /// Drop every entry that has expired. Returns how many were removed.
    ///
    /// Reads never call this; it exists for hosts that keep a cache alive
    /// long enough to care about stale memory.
    pub fn purge_expired(&mut self) -> usize {
        let now = Utc::now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_valid_at(ttl, now));
        before - self.entries.len()
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
