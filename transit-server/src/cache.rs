//! Caching layer for the network feed.
//!
//! The feed changes rarely but the route page needs it on every request.
//! We cache the raw line list for a short TTL. The station graph itself is
//! never cached: it is rebuilt from the lines for every search.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::Line;
use crate::network::{NetworkError, NetworkSource};

/// The feed is a single document, so the cache holds at most one entry.
type FeedKey = ();

/// Cached line list.
type FeedEntry = Arc<Vec<Line>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for the cached line list.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
        }
    }
}

/// Network source with caching.
///
/// Wraps a `NetworkSource` and caches successful fetches. Failed fetches
/// are not cached, so the next request retries.
pub struct CachedNetwork {
    source: NetworkSource,
    lines: MokaCache<FeedKey, FeedEntry>,
}

impl CachedNetwork {
    /// Create a new cached source.
    pub fn new(source: NetworkSource, config: &CacheConfig) -> Self {
        let lines = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { source, lines }
    }

    /// Get the line list, fetching it if the cache is empty or expired.
    pub async fn lines(&self) -> Result<FeedEntry, NetworkError> {
        if let Some(cached) = self.lines.get(&()).await {
            return Ok(cached);
        }

        let entry = self.source.fetch_lines().await?;
        debug!(lines = entry.len(), source = %self.source.describe(), "Cached network feed");
        self.lines.insert((), entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying source for operations that bypass cache.
    pub fn source(&self) -> &NetworkSource {
        &self.source
    }

    /// Whether a line list is currently cached.
    pub async fn is_cached(&self) -> bool {
        self.lines.get(&()).await.is_some()
    }

    /// Drop the cached line list.
    pub async fn invalidate(&self) {
        self.lines.invalidate(&()).await;
    }
}
