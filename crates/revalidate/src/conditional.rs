//! # Conditional Request Construction
//!
//! Derives the conditional request sent to the origin from the caller's
//! request and the cached response's validators. The caller's request is
//! never mutated.

use reqwest::header::{CACHE_CONTROL, HeaderValue, IF_MODIFIED_SINCE, IF_NONE_MATCH, PRAGMA};

use crate::message::{Request, Response};

/// Build the conditional request used to revalidate `cached`.
///
/// The clone drops `Pragma` and `Cache-Control`: the conditional request
/// expresses validators, not cache policy, and must not be judged by any
/// caching layer itself. `If-Modified-Since` is taken from the cached
/// `Last-Modified`, falling back to `Date`; `If-None-Match` is set when
/// the cached response carries an `ETag` and takes precedence at the
/// origin.
///
/// The result must only ever be sent through the engine's own transport
/// handle, never through a caching-aware client. Routing it back through
/// the caching layer would revalidate the revalidation, without bound.
pub fn build_conditional(request: &Request, cached: &Response) -> Request {
    let mut conditional = request.clone();
    conditional.headers_mut().remove(PRAGMA);
    conditional.headers_mut().remove(CACHE_CONTROL);

    if let Some(since) = cached.last_modified().or_else(|| cached.date())
        && let Ok(value) = HeaderValue::from_str(since)
    {
        conditional.headers_mut().insert(IF_MODIFIED_SINCE, value);
    }

    if let Some(etag) = cached.etag()
        && let Ok(value) = HeaderValue::from_str(etag)
    {
        conditional.headers_mut().insert(IF_NONE_MATCH, value);
    }

    conditional
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use reqwest::StatusCode;
    use reqwest::header::{DATE, ETAG, HeaderMap, HeaderName, LAST_MODIFIED};

    fn cached(headers: &[(HeaderName, &'static str)]) -> Response {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(name.clone(), HeaderValue::from_static(value));
        }
        Response::new(StatusCode::OK, map, Bytes::new())
    }

    #[test]
    fn strips_pragma_and_cache_control() {
        let mut request = Request::get("http://example.com/resource");
        request
            .headers_mut()
            .insert(PRAGMA, HeaderValue::from_static("no-cache"));
        request
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let conditional = build_conditional(&request, &cached(&[]));

        assert!(conditional.headers().get(PRAGMA).is_none());
        assert!(conditional.headers().get(CACHE_CONTROL).is_none());
        // The caller's request is untouched
        assert!(request.headers().get(PRAGMA).is_some());
        assert!(request.headers().get(CACHE_CONTROL).is_some());
    }

    #[test]
    fn last_modified_feeds_if_modified_since() {
        let cached = cached(&[
            (LAST_MODIFIED, "Mon, 07 Jul 2025 08:00:00 GMT"),
            (DATE, "Tue, 08 Jul 2025 08:00:00 GMT"),
        ]);
        let conditional = build_conditional(&Request::get("http://example.com/r"), &cached);

        assert_eq!(
            conditional.header(&IF_MODIFIED_SINCE),
            Some("Mon, 07 Jul 2025 08:00:00 GMT")
        );
        assert_eq!(conditional.header(&IF_NONE_MATCH), None);
    }

    #[test]
    fn etag_with_date_fallback() {
        let cached = cached(&[(ETAG, "\"abc\""), (DATE, "Tue, 08 Jul 2025 08:00:00 GMT")]);
        let conditional = build_conditional(&Request::get("http://example.com/r"), &cached);

        assert_eq!(conditional.header(&IF_NONE_MATCH), Some("\"abc\""));
        assert_eq!(
            conditional.header(&IF_MODIFIED_SINCE),
            Some("Tue, 08 Jul 2025 08:00:00 GMT")
        );
    }

    #[test]
    fn no_validators_builds_a_plain_request() {
        let conditional = build_conditional(&Request::get("http://example.com/r"), &cached(&[]));

        assert_eq!(conditional.header(&IF_NONE_MATCH), None);
        assert_eq!(conditional.header(&IF_MODIFIED_SINCE), None);
    }

    #[test]
    fn preserves_method_url_and_other_headers() {
        let mut request = Request::get("http://example.com/resource");
        request.headers_mut().insert(
            HeaderName::from_static("accept"),
            HeaderValue::from_static("application/json"),
        );

        let conditional = build_conditional(&request, &cached(&[(ETAG, "\"x\"")]));

        assert_eq!(conditional.method(), request.method());
        assert_eq!(conditional.url(), request.url());
        assert_eq!(
            conditional.header(&HeaderName::from_static("accept")),
            Some("application/json")
        );
    }
}
