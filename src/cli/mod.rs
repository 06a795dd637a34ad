use clap::Parser;
use std::net::SocketAddr;

use crate::config::PageConfig;

/// Article page server
#[derive(Parser, Debug, Default)]
#[command(name = "article-page")]
#[command(version)]
#[command(about = "Serves article pages rendered from the articles API", long_about = None)]
pub struct Cli {
    /// Origin of the articles API
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Address to listen on
    #[arg(long)]
    pub listen_addr: Option<SocketAddr>,

    /// Article revalidate window in seconds (0 disables caching)
    #[arg(long)]
    pub article_ttl_secs: Option<u64>,

    /// Maximum number of cached articles
    #[arg(long)]
    pub max_cache_entries: Option<usize>,

    /// Per-request timeout for backend calls in seconds
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,
}

impl Cli {
    /// Overlay command-line flags on top of `config`
    pub fn apply(self, mut config: PageConfig) -> PageConfig {
        if let Some(backend_url) = self.backend_url {
            config.backend_url = backend_url;
        }
        if let Some(listen_addr) = self.listen_addr {
            config.listen_addr = listen_addr;
        }
        if let Some(ttl) = self.article_ttl_secs {
            config.article_ttl_secs = ttl;
        }
        if let Some(max) = self.max_cache_entries {
            config.max_cache_entries = max;
        }
        if self.request_timeout_secs.is_some() {
            config.request_timeout_secs = self.request_timeout_secs;
        }
        config
    }
}
