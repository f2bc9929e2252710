//! Effective-host resolution over a preference store.

use tracing::debug;

use crate::model::HostOverride;
use crate::storage::{PreferenceStore, StorageResult};

/// Preference key the override lives under. Absence of the entry is the
/// canonical "no override" state.
const OVERRIDE_HOST_KEY: &str = "override_host_server";

/// Resolves the game-server host the application should connect to, letting a
/// persisted operator override take precedence over the compiled-in default.
///
/// The store handle is injected at construction so callers pick the backing
/// (durable, cached, or in-memory) and the resolver stays a pure accessor: no
/// reachability checks, no host-syntax validation, no retries.
#[derive(Debug, Clone)]
pub struct HostConfigResolver<S> {
    store: S,
}

impl<S: PreferenceStore> HostConfigResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The effective host. A missing or blank stored override falls back to
    /// [`crate::model::DEFAULT_HOST`]; the result is always non-empty.
    pub async fn host_server(&self) -> StorageResult<String> {
        let stored = self.store.get(OVERRIDE_HOST_KEY).await?;
        Ok(HostOverride::new(stored.as_deref())
            .effective_host()
            .to_owned())
    }

    /// The stored override, if any. Blank entries count as absent.
    pub async fn override_host_server(&self) -> StorageResult<Option<String>> {
        let stored = self.store.get(OVERRIDE_HOST_KEY).await?;
        Ok(HostOverride::new(stored.as_deref()).into_option())
    }

    /// Persists `host` verbatim, or removes any stored override when `host`
    /// is absent, empty, or whitespace-only.
    pub async fn set_override_host_server(&self, host: Option<&str>) -> StorageResult<()> {
        match HostOverride::new(host) {
            HostOverride::Set(host) => {
                debug!(host, "storing host override");
                self.store.set(OVERRIDE_HOST_KEY, &host).await
            }
            HostOverride::Unset => {
                debug!("clearing host override");
                self.store.remove(OVERRIDE_HOST_KEY).await
            }
        }
    }

    /// Named convenience for `set_override_host_server(None)`.
    pub async fn clear_override_host_server(&self) -> StorageResult<()> {
        self.set_override_host_server(None).await
    }
}
