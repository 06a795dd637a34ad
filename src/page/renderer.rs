// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content renderer
//!
//! Starts the article and comments fetches together, renders the article as
//! soon as it arrives, and hands the still-pending comments fetch to a
//! [`PendingComments`] region that is resolved later.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::html;
use super::phase::RenderPhase;
use crate::fetch::{Article, ArticleLookup, BackendClient, Comment, FetchError};

type CommentsResult = Result<Option<Vec<Comment>>, FetchError>;

/// Outcome of the primary render
pub enum RenderOutcome {
    Rendered(RenderedPage),
    NotFound,
}

/// Primary content plus the comments region that is still loading
pub struct RenderedPage {
    pub primary: PrimaryView,
    pub comments: PendingComments,
}

/// Article title and content, committed before comments resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryView {
    pub article: Article,
}

impl PrimaryView {
    pub fn to_html(&self) -> String {
        html::article(&self.article)
    }
}

/// Comments region awaiting its fetch
pub struct PendingComments {
    slug: String,
    handle: JoinHandle<CommentsResult>,
    phase: RenderPhase,
}

impl PendingComments {
    pub fn placeholder_html(&self) -> String {
        html::comments_placeholder()
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Wait for the comments fetch and turn it into a view
    ///
    /// A failed fetch becomes [`CommentsView::Failed`] so the already-sent
    /// primary content is unaffected.
    pub async fn resolve(self) -> CommentsView {
        let result = match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(FetchError::Task(e.to_string())),
        };

        let view = match result {
            Ok(Some(comments)) => CommentsView::List(comments),
            Ok(None) => CommentsView::Empty,
            Err(e) => {
                warn!("Comments for {} failed: {}", self.slug, e);
                CommentsView::Failed(e.to_string())
            }
        };
        let mut phase = self.phase;
        enter(&mut phase, view.phase());
        view
    }
}

/// Resolved state of the comments region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentsView {
    List(Vec<Comment>),
    /// Backend sent no comment list; renders nothing
    Empty,
    Failed(String),
}

impl CommentsView {
    pub fn to_html(&self) -> String {
        match self {
            Self::List(comments) => html::comment_list(comments),
            Self::Empty => String::new(),
            Self::Failed(_) => html::comments_error(),
        }
    }

    pub fn phase(&self) -> RenderPhase {
        match self {
            Self::Failed(_) => RenderPhase::CommentsFailed,
            _ => RenderPhase::CommentsRendered,
        }
    }
}

pub struct ContentRenderer {
    client: Arc<BackendClient>,
}

impl ContentRenderer {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    /// Render the primary region for `slug`
    ///
    /// The comments fetch is spawned before the article is awaited, so both
    /// are in flight together. It is not cancelled if the article fails or the
    /// caller drops the result.
    pub async fn render(&self, slug: &str) -> Result<RenderOutcome, FetchError> {
        let comments_client = Arc::clone(&self.client);
        let comments_slug = slug.to_string();
        let handle =
            tokio::spawn(async move { comments_client.get_comments(&comments_slug).await });

        let mut phase = RenderPhase::Start;
        let lookup = self.client.get_article(slug).await;
        enter(&mut phase, RenderPhase::ArticleFetched);

        let article = match lookup {
            Ok(ArticleLookup::Found(article)) => article,
            Ok(ArticleLookup::NotFound) => {
                enter(&mut phase, RenderPhase::NotFound);
                return Ok(RenderOutcome::NotFound);
            }
            Err(e) => {
                enter(&mut phase, RenderPhase::FetchFailed);
                return Err(e);
            }
        };

        enter(&mut phase, RenderPhase::PrimaryRendered);
        enter(&mut phase, RenderPhase::CommentsPending);
        debug!("Primary content ready for: {}", slug);

        Ok(RenderOutcome::Rendered(RenderedPage {
            primary: PrimaryView { article },
            comments: PendingComments {
                slug: slug.to_string(),
                handle,
                phase,
            },
        }))
    }
}

fn enter(phase: &mut RenderPhase, next: RenderPhase) {
    if let Err(e) = phase.transition(next) {
        warn!("{}", e);
    }
}
