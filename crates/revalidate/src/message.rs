//! # HTTP Messages
//!
//! In-memory request/response model the revalidation engine operates on.
//! The surrounding client pipeline hands these in; no wire format is owned
//! here.

use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderName};
use reqwest::{Method, StatusCode};

/// Cache key identifying a stored response
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Request method
    pub method: String,
    /// URL of the resource
    pub url: String,
}

impl CacheKey {
    /// Create a new cache key
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }
}

/// An HTTP request as seen by the revalidation engine
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: String,
    headers: HeaderMap,
}

impl Request {
    /// Create a new request
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// First value of a header, as a string
    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Identity of this request in the cache store
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(self.method.as_str(), self.url.as_str())
    }
}

/// An HTTP response snapshot with a fully materialized body
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Create a new response
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// First value of a header, as a string
    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// ETag validator, if present
    pub fn etag(&self) -> Option<&str> {
        self.header(&header::ETAG)
    }

    /// Last-Modified validator, if present
    pub fn last_modified(&self) -> Option<&str> {
        self.header(&header::LAST_MODIFIED)
    }

    /// Date header, if present
    pub fn date(&self) -> Option<&str> {
        self.header(&header::DATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn cache_key_is_method_and_url() {
        let request = Request::get("http://example.com/a");
        let key = request.cache_key();
        assert_eq!(key.method, "GET");
        assert_eq!(key.url, "http://example.com/a");
        assert_eq!(key, CacheKey::new("GET", "http://example.com/a"));
    }

    #[test]
    fn response_validator_accessors() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ETAG, HeaderValue::from_static("\"abc\""));
        headers.insert(
            header::LAST_MODIFIED,
            HeaderValue::from_static("Wed, 09 Jul 2025 10:00:00 GMT"),
        );
        let response = Response::new(StatusCode::OK, headers, Bytes::new());

        assert_eq!(response.etag(), Some("\"abc\""));
        assert_eq!(
            response.last_modified(),
            Some("Wed, 09 Jul 2025 10:00:00 GMT")
        );
        assert_eq!(response.date(), None);
    }
}
