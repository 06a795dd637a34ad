// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page metadata resolution

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::fetch::{Article, ArticleLookup, BackendClient, FetchError};

/// Title and description embedded into the document head
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl From<&Article> for PageMetadata {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.content.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataLookup {
    Resolved(PageMetadata),
    NotFound,
}

/// Resolves metadata with its own article fetch, independent of the renderer
pub struct MetadataResolver {
    client: Arc<BackendClient>,
}

impl MetadataResolver {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    pub async fn resolve(&self, slug: &str) -> Result<MetadataLookup, FetchError> {
        match self.client.get_article(slug).await? {
            ArticleLookup::Found(article) => {
                debug!("Resolved metadata for: {}", slug);
                Ok(MetadataLookup::Resolved(PageMetadata::from(&article)))
            }
            ArticleLookup::NotFound => Ok(MetadataLookup::NotFound),
        }
    }
}
