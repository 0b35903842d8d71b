//! # Cache Store
//!
//! The storage seam the engine mutates. Implementations are keyed by
//! [`CacheKey`](crate::message::CacheKey) and must make `store`/`delete`
//! safe to call concurrently; per-key mutual exclusion between concurrent
//! revalidations is this collaborator's concern, not the engine's.

use async_trait::async_trait;

use crate::message::{Request, Response};

/// Result of a cache store operation
pub type CacheResult<T> = std::result::Result<T, std::io::Error>;

/// A store for cached responses, keyed by request identity
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Store a response under the request's identity. Idempotent upsert.
    async fn store(&self, request: &Request, response: &Response) -> CacheResult<()>;

    /// Remove the entry stored under the request's identity. Idempotent,
    /// a no-op when absent.
    async fn delete(&self, request: &Request) -> CacheResult<()>;
}
