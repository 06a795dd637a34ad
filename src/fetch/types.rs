// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Backend resource types and fetch errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An article as returned by `GET /api/articles/{slug}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
}

/// Comment identifier; the backend may send either a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A single comment belonging to an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
}

/// Body of `GET /api/articles/{slug}/comments`
///
/// A missing or `null` `comments` field deserializes to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentsEnvelope {
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

/// Result of an article lookup that reached the backend
///
/// `NotFound` is a control transfer to the not-found view, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleLookup {
    Found(Article),
    NotFound,
}

impl ArticleLookup {
    pub fn found(self) -> Option<Article> {
        match self {
            Self::Found(article) => Some(article),
            Self::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub const ARTICLE_FETCH_FAILED: &str = "Failed to fetch article";
pub const COMMENTS_FETCH_FAILED: &str = "Failed to fetch comments";

/// Errors raised by the fetch helpers
#[derive(Debug, Error)]
pub enum FetchError {
    /// Backend answered with a non-success status
    #[error("{message} (HTTP {status} from {url})")]
    Status {
        status: u16,
        url: String,
        message: &'static str,
    },

    /// Request never produced a response (connect error, timeout, body read)
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not the expected JSON shape
    #[error("Invalid JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend base URL cannot carry path segments
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Background comments fetch panicked or was aborted
    #[error("Comments fetch task ended unexpectedly: {0}")]
    Task(String),
}

impl FetchError {
    /// HTTP status reported by the backend, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
