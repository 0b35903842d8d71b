//! # Memory Store
//!
//! In-memory [`CacheStore`] implementation using Moka caching.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::cache::store::{CacheResult, CacheStore};
use crate::message::{CacheKey, Request, Response};

/// Memory store implementation backed by a size-bounded Moka cache
#[derive(Clone)]
pub struct MemoryStore {
    cache: MokaCache<CacheKey, Response>,
    /// Maximum size for this store in bytes
    max_size: u64,
}

impl MemoryStore {
    /// Create a new memory store with the specified size limit and an
    /// optional TTL (zero disables expiration)
    pub fn new(max_size_bytes: u64, ttl_seconds: u64) -> Self {
        if max_size_bytes == 0 {
            panic!("Memory store size must be greater than zero");
        }

        // Size based eviction, weighted by body size
        let mut builder = MokaCache::builder()
            .weigher(|_k, v: &Response| v.body().len().try_into().unwrap_or(u32::MAX))
            .max_capacity(max_size_bytes);

        if ttl_seconds > 0 {
            builder = builder.time_to_live(Duration::from_secs(ttl_seconds));
        }

        let cache = builder.build();

        debug!(
            max_size = max_size_bytes,
            ttl_seconds = ttl_seconds,
            "Memory store created with size limit and TTL"
        );

        Self {
            cache,
            max_size: max_size_bytes,
        }
    }

    /// Look up the response stored for a request, if any
    pub async fn get(&self, request: &Request) -> Option<Response> {
        self.cache.get(&request.cache_key()).await
    }

    /// Check whether an entry exists for a request
    pub async fn contains(&self, request: &Request) -> bool {
        self.cache.contains_key(&request.cache_key())
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn store(&self, request: &Request, response: &Response) -> CacheResult<()> {
        let size = response.body().len() as u64;

        // A single entry cannot be larger than the whole store
        if size > self.max_size {
            warn!(
                url = %request.url(),
                size = size,
                max_size = self.max_size,
                "Entry too large for memory store, skipping"
            );
            return Ok(());
        }

        self.cache
            .insert(request.cache_key(), response.clone())
            .await;

        Ok(())
    }

    async fn delete(&self, request: &Request) -> CacheResult<()> {
        self.cache.invalidate(&request.cache_key()).await;
        Ok(())
    }
}
