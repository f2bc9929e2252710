use actix_web::{middleware::Logger, web, App, HttpServer};
use groundlink_domain::config::{ApiConfig, ConfigError};
use groundlink_domain::services::telemetry::{init_telemetry, TelemetryConfig, TelemetryError};
use groundlink_domain::{CachedPreferences, HostConfigResolver};
use groundlink_storage::SeaOrmPreferences;
use thiserror::Error;
use tracing::info;

use crate::{
    handlers::{
        clear_override_handler, effective_host_handler, metrics_handler, set_override_handler,
    },
    state::AppState,
};

pub async fn run() -> Result<(), BootstrapError> {
    let config = ApiConfig::load_from_env()?;

    let telemetry_config = TelemetryConfig::from_env("API");
    let telemetry = init_telemetry(&telemetry_config)?;

    let preferences = SeaOrmPreferences::connect(config.database_url()).await?;
    let resolver = HostConfigResolver::new(CachedPreferences::new(preferences));
    let state = AppState::new(resolver, telemetry);

    // Metrics stay off the public listener whenever an admin listener exists
    // to serve them.
    let include_metrics_on_public = !config.has_admin_listener();

    let public_state = state.clone();
    let public_server = HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(public_state.clone()))
            .wrap(Logger::default())
            .route("/api/v1/host", web::get().to(effective_host_handler));

        if include_metrics_on_public {
            app = app.route("/metrics", web::get().to(metrics_handler));
        }

        app
    })
    .bind(config.bind_address())?
    .run();
    info!(address = config.bind_address(), "public listener bound");

    let admin_server = match config.admin_bind_address() {
        Some(address) => {
            let admin_state = state.clone();
            let server = HttpServer::new(move || {
                App::new()
                    .app_data(web::Data::new(admin_state.clone()))
                    .wrap(Logger::default())
                    .route("/metrics", web::get().to(metrics_handler))
                    .route("/api/v1/host/override", web::put().to(set_override_handler))
                    .route(
                        "/api/v1/host/override",
                        web::delete().to(clear_override_handler),
                    )
            })
            .bind(address)?
            .run();
            info!(address, "admin listener bound");
            Some(server)
        }
        None => None,
    };

    if let Some(admin) = admin_server {
        tokio::try_join!(public_server, admin)?;
    } else {
        public_server.await?;
    }

    Ok(())
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("storage error: {0}")]
    Storage(#[from] groundlink_domain::storage::StorageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
