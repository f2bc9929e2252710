//! Preference-store abstraction shared by the durable and in-memory backends.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

/// Common result alias for store operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("preference store error: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn from_source(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Durable, installation-scoped key/value storage. A missing key is a normal
/// state, never an error; only backend failures surface as [`StorageError`].
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// HashMap-backed store for tests and embedded use. Clones share the backing
/// map, so rebuilding a consumer over a clone behaves like a process restart
/// against surviving state.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let guard = self.entries.lock().expect("mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut guard = self.entries.lock().expect("mutex poisoned");
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let mut guard = self.entries.lock().expect("mutex poisoned");
        guard.remove(key);
        Ok(())
    }
}
