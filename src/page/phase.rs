// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-request render phases

use thiserror::Error;
use tracing::debug;

/// Where a single page render currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Start,
    ArticleFetched,
    PrimaryRendered,
    CommentsPending,
    CommentsRendered,
    CommentsFailed,
    NotFound,
    FetchFailed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhaseError {
    #[error("illegal render transition {from:?} -> {to:?}")]
    IllegalTransition { from: RenderPhase, to: RenderPhase },
}

impl RenderPhase {
    /// `ArticleFetched` is entered once the article lookup returns, whatever
    /// its outcome; the outcome then picks the next phase.
    pub fn can_advance_to(self, next: RenderPhase) -> bool {
        use RenderPhase::*;
        if self.is_terminal() {
            return false;
        }
        matches!(
            (self, next),
            (Start, ArticleFetched)
                | (ArticleFetched, PrimaryRendered)
                | (ArticleFetched, NotFound)
                | (ArticleFetched, FetchFailed)
                | (PrimaryRendered, CommentsPending)
                | (CommentsPending, CommentsRendered)
                | (CommentsPending, CommentsFailed)
        )
    }

    /// Move to `next`, logging the transition
    pub fn advance(self, next: RenderPhase) -> Result<RenderPhase, PhaseError> {
        if !self.can_advance_to(next) {
            return Err(PhaseError::IllegalTransition {
                from: self,
                to: next,
            });
        }
        debug!("Render phase {:?} -> {:?}", self, next);
        Ok(next)
    }

    /// Advance in place; an illegal move leaves the phase unchanged
    pub fn transition(&mut self, next: RenderPhase) -> Result<(), PhaseError> {
        *self = self.advance(next)?;
        Ok(())
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RenderPhase::CommentsRendered
                | RenderPhase::CommentsFailed
                | RenderPhase::NotFound
                | RenderPhase::FetchFailed
        )
    }
}
