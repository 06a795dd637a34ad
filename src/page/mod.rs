// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article page: metadata resolution and content rendering

pub mod html;
pub mod metadata;
pub mod phase;
pub mod renderer;

pub use metadata::{MetadataLookup, MetadataResolver, PageMetadata};
pub use phase::{PhaseError, RenderPhase};
pub use renderer::{
    CommentsView, ContentRenderer, PendingComments, PrimaryView, RenderOutcome, RenderedPage,
};
