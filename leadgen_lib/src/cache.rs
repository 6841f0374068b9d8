//! Bounded in-memory TTL cache backed by `DashMap` for concurrent access.

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// A single cached value with its expiration time.
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// Thread-safe in-memory cache with time-to-live expiration and a size cap.
///
/// Entries are stored as serialized JSON strings. Expired entries are
/// lazily evicted on the next `get` call for that key. When an insert would
/// push the cache past `max_entries`, expired entries are purged first and
/// then the entry closest to expiry (the oldest insert) is dropped.
pub struct MemoryCache {
    store: DashMap<String, CacheEntry>,
    ttl: Duration,
    max_entries: usize,
}

impl MemoryCache {
    /// Creates a new cache with the given time-to-live and an entry cap of 64.
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, 64)
    }

    /// Creates a new cache holding at most `max_entries` values (minimum 1).
    pub fn with_capacity(ttl: Duration, max_entries: usize) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    /// Returns the cached value for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<String> {
        let entry = self.store.get(key)?;
        if Instant::now() > entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Inserts or overwrites a cache entry. The entry expires after the configured TTL.
    pub fn set(&self, key: String, value: String) {
        if !self.store.contains_key(&key) && self.store.len() >= self.max_entries {
            self.evict();
        }
        self.store.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    fn evict(&self) {
        let now = Instant::now();
        self.store.retain(|_, entry| entry.expires_at >= now);
        if self.store.len() < self.max_entries {
            return;
        }
        let oldest = self
            .store
            .iter()
            .min_by_key(|entry| entry.value().expires_at)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            self.store.remove(&key);
        }
    }

    /// Number of entries currently held, including not-yet-evicted expired ones.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_set_and_get() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set("key1".to_string(), "value1".to_string());
        assert_eq!(cache.get("key1"), Some("value1".to_string()));
    }

    #[test]
    fn cache_miss() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn cache_expiration() {
        let cache = MemoryCache::new(Duration::from_millis(1));
        cache.set("key1".to_string(), "value1".to_string());
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(cache.get("key1"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_overwrite() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set("key1".to_string(), "old".to_string());
        cache.set("key1".to_string(), "new".to_string());
        assert_eq!(cache.get("key1"), Some("new".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_clear() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set("a".to_string(), "1".to_string());
        cache.set("b".to_string(), "2".to_string());
        cache.clear();
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn cache_evicts_oldest_when_full() {
        let cache = MemoryCache::with_capacity(Duration::from_secs(60), 2);
        cache.set("a".to_string(), "1".to_string());
        std::thread::sleep(Duration::from_millis(2));
        cache.set("b".to_string(), "2".to_string());
        std::thread::sleep(Duration::from_millis(2));
        cache.set("c".to_string(), "3".to_string());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some("2".to_string()));
        assert_eq!(cache.get("c"), Some("3".to_string()));
    }

    #[test]
    fn cache_overwrite_when_full_does_not_evict() {
        let cache = MemoryCache::with_capacity(Duration::from_secs(60), 2);
        cache.set("a".to_string(), "1".to_string());
        cache.set("b".to_string(), "2".to_string());
        cache.set("a".to_string(), "10".to_string());
        assert_eq!(cache.get("a"), Some("10".to_string()));
        assert_eq!(cache.get("b"), Some("2".to_string()));
    }

    #[test]
    fn cache_purges_expired_before_evicting_live() {
        let cache = MemoryCache::with_capacity(Duration::from_millis(200), 2);
        cache.set("stale".to_string(), "1".to_string());
        std::thread::sleep(Duration::from_millis(250));
        cache.set("fresh".to_string(), "2".to_string());
        cache.set("newest".to_string(), "3".to_string());
        assert_eq!(cache.get("fresh"), Some("2".to_string()));
        assert_eq!(cache.get("newest"), Some("3".to_string()));
    }
}
