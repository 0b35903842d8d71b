//! # Revalidate Engine
//!
//! HTTP cache revalidation: deciding whether a cached response must be
//! confirmed with the origin before reuse, performing that confirmation
//! with a conditional request, and reconciling the outcome with the cache.
//!
//! ## Features
//!
//! - Pure revalidation predicate over request and cached-response
//!   directives
//! - Conditional request construction with `ETag`/`Last-Modified`
//!   validator precedence
//! - Outcome reconciliation: fresh replacement, confirmed entry with
//!   in-place header refresh, or fail-open fallback
//! - Pluggable transport, cache store and cacheability policy behind
//!   traits, with reqwest and in-memory reference implementations
//!
//! Storage layout, cache-key hashing and the client pipeline that invokes
//! the engine are the caller's concern; the engine operates purely on
//! in-memory [`Request`]/[`Response`] values.

pub mod cache;
pub mod conditional;
pub mod decider;
pub mod directives;
pub mod engine;
pub mod error;
pub mod message;
pub mod transport;

pub use cache::{CacheResult, CacheStore, CacheabilityPolicy, MemoryStore, RfcCacheability};
pub use conditional::build_conditional;
pub use decider::should_revalidate;
pub use directives::CacheControl;
pub use engine::{Revalidation, RevalidationEngine};
pub use error::{RevalidationError, TransportError};
pub use message::{CacheKey, Request, Response};
pub use transport::{HttpTransport, Transport, TransportConfig};
