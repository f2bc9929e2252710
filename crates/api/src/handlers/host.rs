use actix_web::{web, HttpResponse};
use metrics::counter;
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

use crate::state::AppState;

use super::ApiError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HostSource {
    Default,
    Override,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HostResponse {
    pub host: String,
    pub source: HostSource,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SetOverrideRequest {
    pub host: Option<String>,
}

/// The effective host for the game client networking layer.
pub async fn effective_host_handler(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let response = current_host(&state).await?;
    let source_tag = response.source.as_ref().to_owned();
    counter!("api_host_requests_total", "endpoint" => "resolve", "source" => source_tag)
        .increment(1);
    Ok(HttpResponse::Ok().json(response))
}

/// Admin endpoint: a blank or null `host` removes the override, anything else
/// is persisted verbatim.
pub async fn set_override_handler(
    state: web::Data<AppState>,
    payload: web::Json<SetOverrideRequest>,
) -> Result<HttpResponse, ApiError> {
    state
        .resolver()
        .set_override_host_server(payload.host.as_deref())
        .await?;
    let response = current_host(&state).await?;
    let action = match response.source {
        HostSource::Override => "set",
        HostSource::Default => "cleared",
    };
    counter!("api_host_requests_total", "endpoint" => "override", "action" => action).increment(1);
    Ok(HttpResponse::Ok().json(response))
}

/// Admin endpoint: reverts the host to the compiled-in default.
pub async fn clear_override_handler(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    state.resolver().clear_override_host_server().await?;
    counter!("api_host_requests_total", "endpoint" => "override", "action" => "cleared")
        .increment(1);
    let response = current_host(&state).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn current_host(state: &AppState) -> Result<HostResponse, ApiError> {
    let source = match state.resolver().override_host_server().await? {
        Some(_) => HostSource::Override,
        None => HostSource::Default,
    };
    let host = state.resolver().host_server().await?;
    Ok(HostResponse { host, source })
}
