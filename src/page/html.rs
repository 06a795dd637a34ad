// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML fragments for the article page
//!
//! All backend text goes through `ammonia::clean_text` before it is written.

use ammonia::clean_text;

use super::metadata::PageMetadata;
use crate::fetch::{Article, Comment};

pub const COMMENTS_SLOT_ID: &str = "comments-slot";
pub const COMMENTS_RESOLVED_ID: &str = "comments-resolved";
pub const LOADING_COMMENTS: &str = "Loading comments...";
pub const COMMENTS_ERROR: &str = "Failed to load comments";
pub const DOCUMENT_CLOSE: &str = "</div></body></html>";

/// Document start with the metadata embedded in `<head>`
pub fn document_open(metadata: &PageMetadata) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title>\
         <meta name=\"description\" content=\"{}\"></head><body><div>",
        clean_text(&metadata.title),
        clean_text(&metadata.description)
    )
}

/// Primary region: title as heading, content as body
pub fn article(article: &Article) -> String {
    format!(
        "<h1>{}</h1><p>{}</p>",
        clean_text(&article.title),
        clean_text(&article.content)
    )
}

/// Placeholder written before the comments resolve
pub fn comments_placeholder() -> String {
    format!("<div id=\"{}\">{}</div>", COMMENTS_SLOT_ID, LOADING_COMMENTS)
}

/// One `<li>` per comment, keyed by id, in the given order
pub fn comment_list(comments: &[Comment]) -> String {
    let mut html = String::from("<ul>");
    for comment in comments {
        html.push_str(&format!(
            "<li data-key=\"{}\">{}</li>",
            clean_text(&comment.id.to_string()),
            clean_text(&comment.body)
        ));
    }
    html.push_str("</ul>");
    html
}

pub fn comments_error() -> String {
    format!("<div role=\"alert\">{}</div>", COMMENTS_ERROR)
}

/// Late chunk that swaps the placeholder for `inner`
pub fn comments_resolved(inner: &str) -> String {
    format!(
        "<template id=\"{resolved}\">{inner}</template><script>(function(){{\
         var t=document.getElementById(\"{resolved}\");\
         var s=document.getElementById(\"{slot}\");\
         if(t&&s){{s.replaceWith(t.content.cloneNode(true));}}\
         if(t){{t.remove();}}}})();</script>",
        resolved = COMMENTS_RESOLVED_ID,
        slot = COMMENTS_SLOT_ID,
        inner = inner
    )
}

pub fn not_found_page() -> String {
    "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Not Found</title></head>\
     <body><h1>404</h1><p>This article could not be found.</p></body></html>"
        .to_string()
}

pub fn error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Error</title></head>\
         <body><h1>Something went wrong</h1><p>{}</p></body></html>",
        clean_text(message)
    )
}
