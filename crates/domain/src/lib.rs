//! Domain-level building blocks for the groundlink configuration service.
//!
//! The crate owns the host-override model and its resolution rules, the
//! preference-store abstraction the rest of the workspace implements, and the
//! configuration/telemetry wiring shared by binaries.

pub mod config;
pub mod model;
pub mod resolver;
pub mod services;
pub mod storage;

pub use model::{HostOverride, DEFAULT_HOST};
pub use resolver::HostConfigResolver;
pub use services::cache::CachedPreferences;
pub use storage::{MemoryPreferences, PreferenceStore, StorageError, StorageResult};
