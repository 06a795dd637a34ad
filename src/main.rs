// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use article_page::{
    api::{start_server, AppState},
    cli::Cli,
    config::PageConfig,
    version,
};
use clap::Parser;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = Cli::parse().apply(PageConfig::from_env());
    config.validate()?;

    tracing::info!("Starting {}", version::get_version_string());

    let state = AppState::from_config(&config)?;
    start_server(&config, state).await
}
