// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::errors::PageError;
use super::http_server::AppState;
use super::streaming::stream_page;
use crate::fetch::ArticleCacheStats;
use crate::page::{MetadataLookup, RenderOutcome};
use crate::version::{FEATURES, VERSION};

/// GET /articles/{slug} - Article page with streamed comments
///
/// Metadata is resolved first with its own article fetch, then the renderer
/// starts the article and comments fetches together.
///
/// # Errors
/// - 404 Not Found: backend returned 404 for the article
/// - 502 Bad Gateway: article fetch failed or returned invalid JSON
pub async fn article_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, PageError> {
    let metadata = match state.metadata.resolve(&slug).await? {
        MetadataLookup::Resolved(metadata) => metadata,
        MetadataLookup::NotFound => return Err(PageError::NotFound(slug)),
    };

    let page = match state.renderer.render(&slug).await? {
        RenderOutcome::Rendered(page) => page,
        RenderOutcome::NotFound => return Err(PageError::NotFound(slug)),
    };

    info!("Serving article page: {}", slug);
    Ok(stream_page(metadata, page))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub features: Vec<String>,
    pub article_cache: CacheStatsResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatsResponse {
    pub total: usize,
    pub expired: usize,
    pub max: usize,
}

impl From<ArticleCacheStats> for CacheStatsResponse {
    fn from(stats: ArticleCacheStats) -> Self {
        Self {
            total: stats.total,
            expired: stats.expired,
            max: stats.max,
        }
    }
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
        article_cache: state.client.article_cache_stats().into(),
    })
}
