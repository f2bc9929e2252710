//! In-process read-through cache over a preference store.

use async_trait::async_trait;
use moka::sync::Cache;

use crate::storage::{PreferenceStore, StorageResult};

/// Memory-cached view of an inner [`PreferenceStore`], mirroring how platform
/// preference stores serve reads from memory while writing through to disk.
///
/// Writes and removals update the cache synchronously after the inner store
/// accepts them, so the in-process view is immediately consistent with this
/// handle's own mutations. Absence is not cached; a miss always re-checks the
/// inner store.
#[derive(Clone)]
pub struct CachedPreferences<S> {
    inner: S,
    entries: Cache<String, String>,
}

impl<S> CachedPreferences<S> {
    pub const DEFAULT_CAPACITY: u64 = 1_000;

    pub fn new(inner: S) -> Self {
        Self::with_capacity(inner, Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(inner: S, capacity: u64) -> Self {
        Self {
            inner,
            entries: Cache::builder().max_capacity(capacity.max(1)).build(),
        }
    }
}

#[async_trait]
impl<S: PreferenceStore> PreferenceStore for CachedPreferences<S> {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if let Some(value) = self.entries.get(key) {
            return Ok(Some(value));
        }
        let fetched = self.inner.get(key).await?;
        if let Some(value) = &fetched {
            self.entries.insert(key.to_owned(), value.clone());
        }
        Ok(fetched)
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set(key, value).await?;
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key).await?;
        self.entries.invalidate(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferences;

    #[tokio::test]
    async fn writes_reach_the_inner_store() {
        let inner = MemoryPreferences::new();
        let cached = CachedPreferences::new(inner.clone());
        cached.set("k", "v").await.unwrap();
        assert_eq!(inner.get("k").await.unwrap(), Some("v".to_owned()));
    }

    #[tokio::test]
    async fn reads_are_served_from_memory_after_first_load() {
        let inner = MemoryPreferences::new();
        inner.set("k", "v").await.unwrap();

        let cached = CachedPreferences::new(inner.clone());
        assert_eq!(cached.get("k").await.unwrap(), Some("v".to_owned()));

        // The cached view keeps the loaded value even if the backing entry
        // changes underneath this handle.
        inner.set("k", "w").await.unwrap();
        assert_eq!(cached.get("k").await.unwrap(), Some("v".to_owned()));
    }

    #[tokio::test]
    async fn remove_invalidates_the_cached_entry() {
        let inner = MemoryPreferences::new();
        let cached = CachedPreferences::new(inner.clone());
        cached.set("k", "v").await.unwrap();
        cached.remove("k").await.unwrap();
        assert_eq!(cached.get("k").await.unwrap(), None);
        assert_eq!(inner.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn own_mutations_are_immediately_visible() {
        let cached = CachedPreferences::new(MemoryPreferences::new());
        cached.set("k", "v").await.unwrap();
        cached.set("k", "w").await.unwrap();
        assert_eq!(cached.get("k").await.unwrap(), Some("w".to_owned()));
    }
}
