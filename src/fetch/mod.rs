// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch helpers for the articles backend
//!
//! ## Architecture
//!
//! ```text
//! slug → BackendClient::get_article  → ArticleCache (60s) → GET /api/articles/{slug}
//!      → BackendClient::get_comments → (no store)         → GET /api/articles/{slug}/comments
//! ```
//!
//! A 404 on the article endpoint becomes [`ArticleLookup::NotFound`]; every
//! other failure is a [`FetchError`].

pub mod cache;
pub mod client;
pub mod types;

pub use cache::{ArticleCache, ArticleCacheStats, CachePolicy};
pub use client::BackendClient;
pub use types::{Article, ArticleLookup, Comment, CommentId, CommentsEnvelope, FetchError};
