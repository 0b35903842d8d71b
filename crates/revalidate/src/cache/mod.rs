//! # Cache Collaborators
//!
//! The storage and cacheability seams the revalidation engine mutates and
//! consults, plus a memory-backed reference store.

mod memory;
mod policy;
mod store;

pub use memory::MemoryStore;
pub use policy::{CacheabilityPolicy, RfcCacheability};
pub use store::{CacheResult, CacheStore};
