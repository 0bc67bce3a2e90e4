//! Bounded name-to-id cache for resolved namespaces
//!
//! Entries are a disposable projection of persisted state: populated only
//! after the store has confirmed a mapping, never authoritative over it.
//! Eviction is the cache's own bounded-capacity policy; this layer never
//! invalidates entries.

use moka::sync::Cache;

/// Default number of resolved ids kept before eviction
pub const DEFAULT_CACHE_CAPACITY: u64 = 16_384;

// Kept from the shared-cache key layout so namespace entries stay
// disambiguated from other cached objects.
const KEY_PREFIX: &str = "namespace:";

/// Strongly typed `name -> id` cache backed by a bounded moka cache
#[derive(Clone)]
pub struct NamespaceIdCache {
    inner: Cache<String, i64>,
}

impl NamespaceIdCache {
    /// Create a cache holding at most `max_capacity` resolved ids
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.inner.get(&Self::key(name))
    }

    pub fn insert(&self, name: &str, id: i64) {
        self.inner.insert(Self::key(name), id);
    }

    fn key(name: &str) -> String {
        format!("{}{}", KEY_PREFIX, name)
    }
}

impl Default for NamespaceIdCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
