//! In-memory cache with time-based expiry and tag invalidation
//!
//! Loaded collections are cached per slug for a bounded window so
//! repeated page renders within that window observe a single
//! underlying computation. Entries carry tags; an external
//! invalidation signal evicts either one slug's entry or everything
//! carrying the collection-wide tag.
//!
//! The guarded map is never locked across an await point. Two tasks
//! missing the same key may both compute; loads are idempotent pure
//! functions of file contents, so last-writer-wins is fine.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    expires_at: Instant,
    tags: Vec<String>,
}

/// A mapping from key to `{ value, expires_at, tags }` with
/// compute-and-store read-through.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    /// Create a cache whose entries expire `ttl` after insertion
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Get a live entry, treating expired entries as misses
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.lock();
        let entry = entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Store a value under `key`, replacing any previous entry
    pub fn insert(&self, key: &str, tags: &[String], value: V) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + self.ttl,
            tags: tags.to_vec(),
        };
        self.lock().insert(key.to_string(), entry);
    }

    /// Read-through: return the cached value, or run `compute` and
    /// store its result. Only successful computations are cached.
    pub async fn get_or_insert_with<F, Fut, E>(
        &self,
        key: &str,
        tags: &[String],
        compute: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            tracing::debug!("cache hit for {}", key);
            return Ok(value);
        }

        let value = compute().await?;
        self.insert(key, tags, value.clone());
        Ok(value)
    }

    /// Evict every entry carrying `tag`
    pub fn invalidate(&self, tag: &str) {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag));
        let evicted = before - entries.len();
        if evicted > 0 {
            tracing::debug!("invalidated {} cache entries tagged {}", evicted, tag);
        }
    }

    /// Evict a single key
    pub fn remove(&self, key: &str) {
        self.lock().remove(key);
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry<V>>> {
        // A panic mid-insert cannot leave the map inconsistent, so a
        // poisoned lock is still usable
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
