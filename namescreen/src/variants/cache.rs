//! Process-lifetime cache for generated variant sets.
//!
//! The only state in the engine that outlives a single request. Keys
//! combine the normalized target name with a fingerprint of the
//! generation-relevant configuration, so a config change never serves stale
//! variants.

use super::types::VariantSet;
use lru::LruCache;
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Thread-safe LRU cache of variant sets.
pub struct VariantCache {
    inner: Mutex<LruCache<String, VariantSet>>,
}

impl std::fmt::Debug for VariantCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantCache")
            .field("entries", &self.len())
            .finish()
    }
}

impl VariantCache {
    /// Create a cache with the given capacity (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Build a cache key from a normalized name and a config fingerprint.
    pub fn key(normalized_name: &str, fingerprint: &str) -> String {
        format!("{normalized_name}|{fingerprint}")
    }

    /// Fingerprint a serializable config fragment.
    pub fn fingerprint<T: serde::Serialize>(value: &T) -> String {
        let serialized = serde_json::to_vec(value).unwrap_or_default();
        let digest = Sha256::digest(&serialized);
        format!("{digest:x}")
    }

    /// Look up a cached set, refreshing its recency.
    pub fn get(&self, key: &str) -> Option<VariantSet> {
        let mut guard = self.inner.lock().ok()?;
        guard.get(key).cloned()
    }

    /// Insert a set, evicting the least recently used entry when full.
    pub fn insert(&self, key: String, set: VariantSet) {
        if let Ok(mut guard) = self.inner.lock() {
            guard.put(key, set);
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
