// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{article_page_handler, health_handler};
use crate::config::PageConfig;
use crate::fetch::{BackendClient, FetchError};
use crate::page::{ContentRenderer, MetadataResolver};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<BackendClient>,
    pub metadata: Arc<MetadataResolver>,
    pub renderer: Arc<ContentRenderer>,
}

impl AppState {
    /// Wire resolver and renderer to one shared backend client
    pub fn new(client: BackendClient) -> Self {
        let client = Arc::new(client);
        Self {
            metadata: Arc::new(MetadataResolver::new(Arc::clone(&client))),
            renderer: Arc::new(ContentRenderer::new(Arc::clone(&client))),
            client,
        }
    }

    pub fn from_config(config: &PageConfig) -> Result<Self, FetchError> {
        Ok(Self::new(BackendClient::new(config)?))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/articles/:slug", get(article_page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: &PageConfig, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    tracing::info!(
        "Article page server listening on {} (backend {})",
        config.listen_addr,
        config.backend_url
    );

    axum::serve(listener, app).await?;

    Ok(())
}
