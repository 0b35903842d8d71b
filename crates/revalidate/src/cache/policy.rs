//! # Cacheability Policy
//!
//! Strategy deciding whether a response may enter the cache. Injected into
//! the engine as a trait object so callers can swap the rule without
//! touching the revalidation flow.

use reqwest::StatusCode;

use crate::directives::CacheControl;
use crate::message::Response;

/// Pure predicate: may this response be stored?
pub trait CacheabilityPolicy: Send + Sync {
    fn is_cacheable(&self, response: &Response) -> bool;
}

/// Default cacheability rule: a 200 response whose `Cache-Control` carries
/// neither `no-store` nor `private`
#[derive(Debug, Default, Clone, Copy)]
pub struct RfcCacheability;

impl CacheabilityPolicy for RfcCacheability {
    fn is_cacheable(&self, response: &Response) -> bool {
        if response.status() != StatusCode::OK {
            return false;
        }

        let cc = CacheControl::from_headers(response.headers());
        !cc.has("no-store") && !cc.has("private")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue};

    fn response(status: StatusCode, cache_control: Option<&'static str>) -> Response {
        let mut headers = HeaderMap::new();
        if let Some(value) = cache_control {
            headers.insert(CACHE_CONTROL, HeaderValue::from_static(value));
        }
        Response::new(status, headers, Bytes::new())
    }

    #[test]
    fn plain_ok_is_cacheable() {
        assert!(RfcCacheability.is_cacheable(&response(StatusCode::OK, None)));
    }

    #[test]
    fn non_ok_statuses_are_not() {
        for status in [
            StatusCode::NO_CONTENT,
            StatusCode::NOT_MODIFIED,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert!(
                !RfcCacheability.is_cacheable(&response(status, None)),
                "status {status}"
            );
        }
    }

    #[test]
    fn no_store_and_private_are_not() {
        assert!(!RfcCacheability.is_cacheable(&response(StatusCode::OK, Some("no-store"))));
        assert!(!RfcCacheability.is_cacheable(&response(StatusCode::OK, Some("private"))));
        assert!(RfcCacheability.is_cacheable(&response(StatusCode::OK, Some("max-age=60"))));
    }

}
