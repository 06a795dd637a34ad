// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article response caching
//!
//! Provides a TTL-based cache so a fetched article can be reused for the
//! revalidate window before the backend is asked again.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use super::types::Article;

/// How a fetch helper treats previously fetched responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Reuse a cached response until it is older than the window
    Revalidate(Duration),
    /// Always go to the origin
    NoStore,
}

impl CachePolicy {
    /// `Revalidate` for a non-zero window, `NoStore` otherwise
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            Self::NoStore
        } else {
            Self::Revalidate(Duration::from_secs(secs))
        }
    }

    pub fn is_cacheable(&self) -> bool {
        matches!(self, Self::Revalidate(_))
    }
}

#[derive(Debug, Clone)]
struct CachedArticle {
    article: Article,
    fetched_at: Instant,
}

/// Article cache statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCacheStats {
    pub total: usize,
    pub expired: usize,
    pub max: usize,
}

/// Article cache with TTL-based expiration, keyed by slug
pub struct ArticleCache {
    cache: RwLock<HashMap<String, CachedArticle>>,
    ttl: Duration,
    max_entries: usize,
}

impl ArticleCache {
    /// Create a new article cache
    ///
    /// # Arguments
    /// * `ttl` - Revalidate window for cached entries
    /// * `max_entries` - Maximum number of entries before eviction
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            ttl,
            max_entries,
        }
    }

    /// Get a cached article if it is still inside the revalidate window
    pub fn get(&self, slug: &str) -> Option<Article> {
        let cache = self.cache.read().ok()?;
        let entry = cache.get(slug)?;

        if entry.fetched_at.elapsed() > self.ttl {
            return None;
        }

        Some(entry.article.clone())
    }

    /// Insert a freshly fetched article
    pub fn insert(&self, slug: &str, article: Article) {
        let mut cache = match self.cache.write() {
            Ok(c) => c,
            Err(_) => return,
        };

        if !cache.contains_key(slug) && cache.len() >= self.max_entries {
            Self::evict_oldest(&mut cache);
        }

        cache.insert(
            slug.to_string(),
            CachedArticle {
                article,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn stats(&self) -> ArticleCacheStats {
        let cache = match self.cache.read() {
            Ok(c) => c,
            Err(_) => {
                return ArticleCacheStats {
                    total: 0,
                    expired: 0,
                    max: self.max_entries,
                }
            }
        };
        let expired = cache
            .values()
            .filter(|e| e.fetched_at.elapsed() > self.ttl)
            .count();
        ArticleCacheStats {
            total: cache.len(),
            expired,
            max: self.max_entries,
        }
    }

    fn evict_oldest(cache: &mut HashMap<String, CachedArticle>) {
        if let Some(oldest_key) = cache
            .iter()
            .min_by_key(|(_, v)| v.fetched_at)
            .map(|(k, _)| k.clone())
        {
            cache.remove(&oldest_key);
        }
    }
}
