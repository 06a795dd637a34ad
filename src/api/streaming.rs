// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use futures::stream::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tracing::debug;

use crate::page::{html, PageMetadata, RenderedPage};

/// Body stream fed by the page writer task
pub struct PageStream {
    receiver: mpsc::Receiver<Bytes>,
}

impl PageStream {
    pub fn new(receiver: mpsc::Receiver<Bytes>) -> Self {
        Self { receiver }
    }
}

impl Stream for PageStream {
    type Item = Result<Bytes, std::io::Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.receiver.poll_recv(cx) {
            Poll::Ready(Some(chunk)) => Poll::Ready(Some(Ok(chunk))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// First chunk: head with metadata, primary view and comments placeholder
pub fn format_shell(metadata: &PageMetadata, page: &RenderedPage) -> String {
    let mut shell = html::document_open(metadata);
    shell.push_str(&page.primary.to_html());
    shell.push_str(&page.comments.placeholder_html());
    shell
}

/// Stream the page as three chunks: shell, resolved comments, document close
///
/// The shell is queued before the comments are awaited. If the client goes
/// away the writer stops sending, but the comments fetch itself runs on.
pub fn stream_page(metadata: PageMetadata, page: RenderedPage) -> Response {
    let (sender, receiver) = mpsc::channel::<Bytes>(4);
    let shell = format_shell(&metadata, &page);
    let RenderedPage { comments, .. } = page;

    tokio::spawn(async move {
        if sender.send(Bytes::from(shell)).await.is_err() {
            debug!("Client went away before the page shell was sent");
            return;
        }

        let view = comments.resolve().await;
        let resolved = html::comments_resolved(&view.to_html());
        if sender.send(Bytes::from(resolved)).await.is_err() {
            debug!("Client went away before comments were sent");
            return;
        }

        let _ = sender.send(Bytes::from_static(html::DOCUMENT_CLOSE.as_bytes())).await;
    });

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(PageStream::new(receiver)),
    )
        .into_response()
}
