//! # Revalidation Engine
//!
//! Orchestrates a single revalidation attempt: build the conditional
//! request, send it through the engine's own transport, and reconcile the
//! origin's answer with the cache. The engine is the only component with
//! side effects on the store, and it is stateless apart from its
//! collaborator handles, so concurrent attempts for different requests are
//! safe.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{CACHE_CONTROL, DATE, ETAG, EXPIRES, HeaderName, LAST_MODIFIED};
use tracing::{debug, info, warn};

use crate::cache::{CacheStore, CacheabilityPolicy, RfcCacheability};
use crate::conditional::build_conditional;
use crate::error::{RevalidationError, TransportError};
use crate::message::{Request, Response};
use crate::transport::Transport;

/// Headers refreshed in place on the cached response after a 304.
///
/// This fixed set is load-bearing: widening it silently changes
/// cache-freshness semantics, narrowing it leaves stale metadata behind.
const REFRESHED_HEADERS: [HeaderName; 5] = [DATE, EXPIRES, CACHE_CONTROL, ETAG, LAST_MODIFIED];

/// Outcome of a revalidation attempt.
///
/// `Valid` means the cached response remains usable as-is, with its
/// metadata headers possibly refreshed in place. `Invalid` means the
/// caller must not trust the cached copy and should proceed as on a cache
/// miss; when the origin answered the conditional request with a full 200,
/// that fresh response rides along and should be used instead.
#[derive(Debug)]
pub enum Revalidation {
    /// The cached response was confirmed and can be served
    Valid,
    /// The cached response must not be reused; a replacement is included
    /// when the origin produced one
    Invalid(Option<Response>),
}

impl Revalidation {
    /// Whether the cached response remains valid
    pub fn is_valid(&self) -> bool {
        matches!(self, Revalidation::Valid)
    }

    /// The fresh replacement response, if the origin returned one
    pub fn into_fresh(self) -> Option<Response> {
        match self {
            Revalidation::Invalid(fresh) => fresh,
            Revalidation::Valid => None,
        }
    }
}

/// Revalidation engine over pluggable transport, store and cacheability
/// policy
pub struct RevalidationEngine {
    transport: Arc<dyn Transport>,
    store: Arc<dyn CacheStore>,
    policy: Arc<dyn CacheabilityPolicy>,
}

impl RevalidationEngine {
    /// Create an engine with an explicit cacheability policy
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn CacheStore>,
        policy: Arc<dyn CacheabilityPolicy>,
    ) -> Self {
        Self {
            transport,
            store,
            policy,
        }
    }

    /// Create an engine with the default [`RfcCacheability`] policy
    pub fn with_default_policy(transport: Arc<dyn Transport>, store: Arc<dyn CacheStore>) -> Self {
        Self::new(transport, store, Arc::new(RfcCacheability))
    }

    /// Revalidate `cached` against the origin for `request`.
    ///
    /// Revalidation is a best-effort optimization: ordinary failures
    /// (error statuses other than 404, network errors, timeouts, validator
    /// mismatches) degrade to `Invalid` so the caller falls back to a full
    /// fetch, no worse off than without a cache. Only a 404 crosses the
    /// boundary as [`RevalidationError::ResourceGone`], after evicting the
    /// entry, so subsequent callers stop retrying a deleted resource.
    ///
    /// On a confirming 304 the cached response's metadata headers are
    /// refreshed in place; the caller must own the cached entry
    /// exclusively for the duration of the call.
    pub async fn revalidate(
        &self,
        request: &Request,
        cached: &mut Response,
    ) -> Result<Revalidation, RevalidationError> {
        let conditional = build_conditional(request, cached);

        let validated = match self.transport.send(&conditional).await {
            Ok(response) => response,
            Err(TransportError::Status(response))
                if response.status() == StatusCode::NOT_FOUND =>
            {
                // Confirmed gone: evict, then surface the failure
                if let Err(error) = self.store.delete(request).await {
                    warn!(url = %request.url(), error = %error, "Failed to evict entry for gone resource");
                }
                info!(url = %request.url(), "Resource gone, cache entry evicted");
                return Err(RevalidationError::ResourceGone {
                    url: request.url().to_string(),
                });
            }
            Err(error) => {
                // Fail open: could not confirm, fall back to a full fetch
                debug!(url = %request.url(), error = %error, "Revalidation inconclusive, falling back to full fetch");
                return Ok(Revalidation::Invalid(None));
            }
        };

        match validated.status() {
            StatusCode::OK => {
                info!(url = %request.url(), "Origin returned a full response, replacing cache entry");
                if self.policy.is_cacheable(&validated) {
                    if let Err(error) = self.store.store(request, &validated).await {
                        warn!(url = %request.url(), error = %error, "Failed to store replacement response");
                    }
                }
                Ok(Revalidation::Invalid(Some(validated)))
            }
            StatusCode::NOT_MODIFIED => self.confirm_not_modified(request, cached, &validated).await,
            status => {
                debug!(url = %request.url(), status = %status, "Unexpected revalidation status, falling back to full fetch");
                Ok(Revalidation::Invalid(None))
            }
        }
    }

    /// Reconcile a 304: confirm identity, then refresh metadata headers in
    /// place
    async fn confirm_not_modified(
        &self,
        request: &Request,
        cached: &mut Response,
        validated: &Response,
    ) -> Result<Revalidation, RevalidationError> {
        // A 304 describing a different representation than the one cached
        // means origin/proxy inconsistency; leave the store untouched.
        if let Some(etag) = validated.etag()
            && cached.etag() != Some(etag)
        {
            debug!(
                url = %request.url(),
                validated_etag = etag,
                cached_etag = cached.etag().unwrap_or(""),
                "ETag mismatch on 304, cached entry no longer matches origin"
            );
            return Ok(Revalidation::Invalid(None));
        }

        let mut modified = false;
        for name in &REFRESHED_HEADERS {
            if let Some(value) = validated.headers().get(name) {
                cached.headers_mut().insert(name.clone(), value.clone());
                modified = true;
            }
        }

        if modified && self.policy.is_cacheable(cached) {
            if let Err(error) = self.store.store(request, cached).await {
                warn!(url = %request.url(), error = %error, "Failed to persist refreshed headers");
            }
        }

        debug!(url = %request.url(), refreshed = modified, "Cached response confirmed by origin");
        Ok(Revalidation::Valid)
    }
}
