// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::fmt;
use tracing::warn;

use crate::fetch::FetchError;
use crate::page::html;

/// Page-level failures; both replace the whole page
#[derive(Debug)]
pub enum PageError {
    /// Article does not exist; served as the not-found view
    NotFound(String),
    /// Article could not be fetched or parsed
    Upstream(FetchError),
}

impl PageError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            PageError::NotFound(_) => html::not_found_page(),
            PageError::Upstream(FetchError::Status { message, .. }) => html::error_page(message),
            PageError::Upstream(_) => html::error_page(crate::fetch::types::ARTICLE_FETCH_FAILED),
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NotFound(slug) => write!(f, "Article not found: {}", slug),
            PageError::Upstream(e) => write!(f, "Upstream error: {}", e),
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageError::NotFound(_) => None,
            PageError::Upstream(e) => Some(e),
        }
    }
}

impl From<FetchError> for PageError {
    fn from(error: FetchError) -> Self {
        PageError::Upstream(error)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        if let PageError::Upstream(e) = &self {
            warn!("Article page failed: {}", e);
        }
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            self.to_html(),
        )
            .into_response()
    }
}
