//! # Cache-Control Directives
//!
//! Parsed `Cache-Control` token set for one message, queryable by directive
//! name. Directive names are case-insensitive; values after `=` are ignored
//! since the revalidation rules only test for presence.

use reqwest::header::{CACHE_CONTROL, HeaderMap};

/// Parsed `Cache-Control` directives of a single message
#[derive(Debug, Clone, Default)]
pub struct CacheControl {
    directives: Vec<String>,
    present: bool,
}

impl CacheControl {
    /// Parse every `Cache-Control` header value on the given header map
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut directives = Vec::new();
        let mut present = false;

        for value in headers.get_all(CACHE_CONTROL) {
            present = true;
            let Ok(value) = value.to_str() else {
                continue;
            };
            for token in value.split(',') {
                // Presence check only, so `max-age=60` is recorded as `max-age`
                let name = token.split('=').next().unwrap_or("").trim();
                if !name.is_empty() {
                    directives.push(name.to_ascii_lowercase());
                }
            }
        }

        Self {
            directives,
            present,
        }
    }

    /// Whether the message carried a `Cache-Control` header at all,
    /// including an empty or unparsable one
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Whether the named directive appears
    pub fn has(&self, name: &str) -> bool {
        self.directives.iter().any(|d| d == name)
    }
}
