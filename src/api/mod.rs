// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod streaming;

pub use errors::PageError;
pub use handlers::{article_page_handler, health_handler, HealthResponse};
pub use http_server::{router, start_server, AppState};
pub use streaming::{stream_page, PageStream};
