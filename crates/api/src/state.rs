use groundlink_domain::services::telemetry::TelemetryGuard;
use groundlink_domain::{CachedPreferences, HostConfigResolver};
use groundlink_storage::SeaOrmPreferences;

/// Resolver shared by all handlers: the durable preference database behind
/// the in-process cache.
pub type AppResolver = HostConfigResolver<CachedPreferences<SeaOrmPreferences>>;

#[derive(Clone)]
pub struct AppState {
    resolver: AppResolver,
    telemetry: TelemetryGuard,
}

impl AppState {
    pub fn new(resolver: AppResolver, telemetry: TelemetryGuard) -> Self {
        Self {
            resolver,
            telemetry,
        }
    }

    pub fn resolver(&self) -> &AppResolver {
        &self.resolver
    }

    pub fn telemetry(&self) -> &TelemetryGuard {
        &self.telemetry
    }
}
