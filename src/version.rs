// Version information for the article page service

/// Semantic version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "article-metadata",
    "streamed-comments",
    "article-revalidate-cache",
    "not-found-view",
];

/// Get version information as a formatted string
pub fn get_version_string() -> String {
    format!("article-page {}", VERSION)
}
