// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Metadata resolver tests

use article_page::{
    ContentRenderer, MetadataLookup, MetadataResolver, PageMetadata, RenderOutcome,
};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::support::*;

#[tokio::test]
async fn test_resolves_title_and_description() {
    let server = MockServer::start().await;
    mount(
        &server,
        article_path("hello"),
        json_response(article_json("Hello", "An article body")),
    )
    .await;

    let client = Arc::new(client_for(&config_for(&server)));
    let resolver = MetadataResolver::new(client);

    assert_eq!(
        resolver.resolve("hello").await.unwrap(),
        MetadataLookup::Resolved(PageMetadata {
            title: "Hello".to_string(),
            description: "An article body".to_string(),
        })
    );
}

#[tokio::test]
async fn test_not_found() {
    let server = MockServer::start().await;
    mount(&server, article_path("missing"), ResponseTemplate::new(404)).await;

    let resolver = MetadataResolver::new(Arc::new(client_for(&config_for(&server))));

    assert_eq!(
        resolver.resolve("missing").await.unwrap(),
        MetadataLookup::NotFound
    );
}

#[tokio::test]
async fn test_failure_propagates() {
    let server = MockServer::start().await;
    mount(&server, article_path("broken"), ResponseTemplate::new(503)).await;

    let resolver = MetadataResolver::new(Arc::new(client_for(&config_for(&server))));

    let error = resolver.resolve("broken").await.unwrap_err();
    assert_eq!(error.status(), Some(503));
}

#[tokio::test]
async fn test_resolver_and_renderer_fetch_independently() {
    let server = MockServer::start().await;
    // First article request sees the old revision, later ones the new one
    Mock::given(method("GET"))
        .and(path(article_path("edited")))
        .respond_with(json_response(article_json("Before", "Old body")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount(
        &server,
        article_path("edited"),
        json_response(article_json("After", "New body")),
    )
    .await;
    mount(
        &server,
        comments_path("edited"),
        json_response(comments_json(&[])),
    )
    .await;

    let client = Arc::new(client_for(&uncached_config_for(&server)));
    let resolver = MetadataResolver::new(Arc::clone(&client));
    let renderer = ContentRenderer::new(client);

    let metadata = match resolver.resolve("edited").await.unwrap() {
        MetadataLookup::Resolved(metadata) => metadata,
        MetadataLookup::NotFound => panic!("expected metadata"),
    };
    let page = match renderer.render("edited").await.unwrap() {
        RenderOutcome::Rendered(page) => page,
        RenderOutcome::NotFound => panic!("expected rendered page"),
    };

    assert_eq!(metadata.title, "Before");
    assert_eq!(page.primary.article.title, "After");
    assert_eq!(hits(&server, &article_path("edited")).await, 2);
}
