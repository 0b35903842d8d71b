//! # Revalidation Decider
//!
//! Pure predicate deciding whether a cached response must be confirmed
//! with the origin before reuse. No side effects; safe to call repeatedly
//! and concurrently.

use reqwest::Method;
use reqwest::header::PRAGMA;

use crate::directives::CacheControl;
use crate::message::{Request, Response};

/// Decide whether `cached` must be revalidated before serving it for
/// `request`.
///
/// Rules, in order, any hit deciding the outcome:
///
/// 1. Non-GET requests are never revalidated (the engine is defined only
///    for safe, idempotent retrieval).
/// 2. `Pragma: no-cache` on the request.
/// 3. `no-cache` or `must-revalidate` in the request's `Cache-Control`.
/// 4. `no-cache` or `must-revalidate` in the cached response's
///    `Cache-Control`.
/// 5. The request carries no `Cache-Control` header at all and the cached
///    response has an `ETag`: revalidate opportunistically, since the
///    client expressed no freshness policy and a strong validator is
///    available.
///
/// Otherwise the cached response can be served without contacting the
/// origin.
pub fn should_revalidate(request: &Request, cached: &Response) -> bool {
    if request.method() != Method::GET {
        return false;
    }

    if request
        .header(&PRAGMA)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("no-cache"))
    {
        return true;
    }

    let request_cc = CacheControl::from_headers(request.headers());
    if request_cc.has("no-cache") || request_cc.has("must-revalidate") {
        return true;
    }

    let response_cc = CacheControl::from_headers(cached.headers());
    if response_cc.has("no-cache") || response_cc.has("must-revalidate") {
        return true;
    }

    !request_cc.is_present() && cached.etag().is_some()
}
