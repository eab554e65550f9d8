//! Bounded memoization for idempotent upstream lookups.

use std::{future::Future, hash::Hash, num::NonZeroUsize, sync::Mutex};

use lru::LruCache;

use crate::Res;

/// Thread-safe LRU map from request arguments to upstream responses.
///
/// The lock is only held for the map operation itself, never across the
/// upstream call, so a slow lookup does not serialize unrelated requests.
pub struct MemoCache<K: Hash + Eq, V> {
    entries: Mutex<LruCache<K, V>>,
}

impl<K: Hash + Eq + Clone, V: Clone> MemoCache<K, V> {
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.put(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.lock().map(|e| e.cap().get()).unwrap_or(0)
    }

    /// Returns the cached value for `key` or runs `fetch` and caches its
    /// success. Errors are handed back to the caller and never stored.
    pub async fn get_or_try_insert_with<F, Fut>(&self, key: K, fetch: F) -> Res<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Res<V>>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = fetch().await?;
        self.put(key, value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let cache: MemoCache<&str, u32> = MemoCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        // touch "a" so "b" becomes the eviction candidate
        assert_eq!(cache.get(&"a"), Some(1));
        cache.put("c", 3);

        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"c"), Some(3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_holds_one_entry() {
        let cache: MemoCache<u8, u8> = MemoCache::new(0);
        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.capacity(), 1);
        assert_eq!(cache.get(&2), Some(2));
        assert_eq!(cache.get(&1), None);
    }
}
