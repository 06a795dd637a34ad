// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod page;
pub mod version;

// Re-export main types
pub use api::{router, AppState, PageError};
pub use config::PageConfig;
pub use fetch::{Article, ArticleLookup, BackendClient, Comment, CommentId, FetchError};
pub use page::{
    CommentsView, ContentRenderer, MetadataLookup, MetadataResolver, PageMetadata, RenderOutcome,
};
