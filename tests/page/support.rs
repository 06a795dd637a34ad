// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared helpers: a mock articles backend and a router bound to it
#![allow(dead_code)]

use article_page::{router, AppState, BackendClient, PageConfig};
use axum::{
    body::Body,
    http::{Request, Response},
};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn config_for(server: &MockServer) -> PageConfig {
    PageConfig {
        backend_url: server.uri(),
        ..Default::default()
    }
}

pub fn uncached_config_for(server: &MockServer) -> PageConfig {
    PageConfig {
        article_ttl_secs: 0,
        ..config_for(server)
    }
}

pub fn client_for(config: &PageConfig) -> BackendClient {
    BackendClient::new(config).expect("client")
}

pub fn article_json(title: &str, content: &str) -> Value {
    json!({ "title": title, "content": content })
}

pub fn comments_json(comments: &[(i64, &str)]) -> Value {
    let comments: Vec<Value> = comments
        .iter()
        .map(|(id, body)| json!({ "id": id, "body": body }))
        .collect();
    json!({ "comments": comments })
}

pub fn article_path(slug: &str) -> String {
    format!("/api/articles/{}", slug)
}

pub fn comments_path(slug: &str) -> String {
    format!("/api/articles/{}/comments", slug)
}

pub async fn mount(server: &MockServer, endpoint: String, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_expecting(
    server: &MockServer,
    endpoint: String,
    response: ResponseTemplate,
    calls: u64,
) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await;
}

pub fn json_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn delayed_json_response(body: Value, delay: Duration) -> ResponseTemplate {
    json_response(body).set_delay(delay)
}

/// Number of requests the backend received for `endpoint`
pub async fn hits(server: &MockServer, endpoint: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == endpoint)
        .count()
}

pub fn app_state(config: &PageConfig) -> AppState {
    AppState::from_config(config).expect("app state")
}

pub async fn get(state: AppState, uri: &str) -> Response<Body> {
    router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Text as it appears in the rendered page
pub fn escaped(text: &str) -> String {
    ammonia::clean_text(text)
}
