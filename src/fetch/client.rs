// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch helpers for the articles API
//!
//! One helper per resource: articles are cached for the revalidate window,
//! comments always go to the origin.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use super::cache::{ArticleCache, ArticleCacheStats, CachePolicy};
use super::types::{
    Article, ArticleLookup, Comment, CommentsEnvelope, FetchError, ARTICLE_FETCH_FAILED,
    COMMENTS_FETCH_FAILED,
};
use crate::config::PageConfig;
use crate::version::VERSION;

/// HTTP client for `GET /api/articles/{slug}` and its comments
pub struct BackendClient {
    client: Client,
    base_url: Url,
    article_policy: CachePolicy,
    article_cache: Arc<ArticleCache>,
}

impl BackendClient {
    /// Create a client for the configured backend origin
    pub fn new(config: &PageConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.backend_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.backend_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.backend_url.clone()));
        }

        let mut builder = Client::builder().user_agent(format!("article-page/{}", VERSION));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        let article_policy = config.article_cache_policy();
        let ttl = match article_policy {
            CachePolicy::Revalidate(window) => window,
            CachePolicy::NoStore => std::time::Duration::ZERO,
        };

        Ok(Self {
            client,
            base_url,
            article_policy,
            article_cache: Arc::new(ArticleCache::new(ttl, config.max_cache_entries)),
        })
    }

    /// Fetch an article, honouring the revalidate window
    ///
    /// A 404 is reported as [`ArticleLookup::NotFound`]; any other failure
    /// status is a [`FetchError::Status`]. Only found articles are cached.
    pub async fn get_article(&self, slug: &str) -> Result<ArticleLookup, FetchError> {
        if self.article_policy.is_cacheable() {
            if let Some(article) = self.article_cache.get(slug) {
                debug!("Article cache hit for: {}", slug);
                return Ok(ArticleLookup::Found(article));
            }
        }

        let url = self.endpoint(slug, &[])?;
        debug!("Fetching article from: {}", url);

        let response = self.send(&url).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("Article not found: {}", slug);
            return Ok(ArticleLookup::NotFound);
        }
        if !status.is_success() {
            warn!("Article fetch for {} returned HTTP {}", slug, status.as_u16());
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message: ARTICLE_FETCH_FAILED,
            });
        }

        let article: Article = Self::parse(&url, response).await?;

        if self.article_policy.is_cacheable() {
            self.article_cache.insert(slug, article.clone());
        }

        Ok(ArticleLookup::Found(article))
    }

    /// Fetch the comments of an article; never cached
    ///
    /// Returns `None` when the backend sends no `comments` field or `null`.
    pub async fn get_comments(&self, slug: &str) -> Result<Option<Vec<Comment>>, FetchError> {
        let url = self.endpoint(slug, &["comments"])?;
        debug!("Fetching comments from: {}", url);

        let response = self.send(&url).await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Comments fetch for {} returned HTTP {}", slug, status.as_u16());
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message: COMMENTS_FETCH_FAILED,
            });
        }

        let envelope: CommentsEnvelope = Self::parse(&url, response).await?;
        Ok(envelope.comments)
    }

    pub fn article_cache_stats(&self) -> ArticleCacheStats {
        self.article_cache.stats()
    }

    pub fn article_policy(&self) -> CachePolicy {
        self.article_policy
    }

    /// Build `{base}/api/articles/{slug}/{tail..}` with the slug as one encoded segment
    pub fn endpoint(&self, slug: &str, tail: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?;
            segments
                .pop_if_empty()
                .extend(["api", "articles", slug])
                .extend(tail);
        }
        Ok(url)
    }

    async fn send(&self, url: &Url) -> Result<reqwest::Response, FetchError> {
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })
    }

    async fn parse<T: DeserializeOwned>(
        url: &Url,
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let body = response.bytes().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
