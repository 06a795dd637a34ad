// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the article page service
//!
//! Defines the backend origin, listen address, and fetch/caching settings.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::fetch::CachePolicy;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_ARTICLE_TTL_SECS: u64 = 60;
pub const DEFAULT_MAX_CACHE_ENTRIES: usize = 500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("backend_url is not a valid URL: {0}")]
    InvalidBackendUrl(String),
    #[error("backend_url must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("max_cache_entries must be at least 1")]
    EmptyCache,
    #[error("request_timeout_secs must be at least 1 when set")]
    ZeroTimeout,
}

/// Configuration for the article page service
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Origin of the articles API (default: http://localhost:3000)
    pub backend_url: String,
    /// Address the page server binds to (default: 127.0.0.1:8080)
    pub listen_addr: SocketAddr,
    /// Revalidate window for article responses in seconds, 0 disables caching (default: 60)
    pub article_ttl_secs: u64,
    /// Maximum cached articles (default: 500)
    pub max_cache_entries: usize,
    /// Per-request timeout in seconds; `None` keeps the client default
    pub request_timeout_secs: Option<u64>,
}

impl PageConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: env::var("ARTICLE_PAGE_BACKEND_URL").unwrap_or(defaults.backend_url),
            listen_addr: env::var("ARTICLE_PAGE_LISTEN_ADDR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.listen_addr),
            article_ttl_secs: env::var("ARTICLE_PAGE_ARTICLE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.article_ttl_secs),
            max_cache_entries: env::var("ARTICLE_PAGE_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_cache_entries),
            request_timeout_secs: env::var("ARTICLE_PAGE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.backend_url)
            .map_err(|e| ConfigError::InvalidBackendUrl(format!("{}: {}", self.backend_url, e)))?;
        if !["http", "https"].contains(&url.scheme()) {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        if self.max_cache_entries == 0 {
            return Err(ConfigError::EmptyCache);
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn article_cache_policy(&self) -> CachePolicy {
        CachePolicy::from_secs(self.article_ttl_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            article_ttl_secs: DEFAULT_ARTICLE_TTL_SECS,
            max_cache_entries: DEFAULT_MAX_CACHE_ENTRIES,
            request_timeout_secs: None,
        }
    }
}
