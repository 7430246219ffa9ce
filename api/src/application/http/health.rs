use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use nutriscan_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LivenessResponse {
    pub status: String,
    pub database_latency_ms: u64,
}

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse)
    ),
)]
pub async fn live(
    State(state): State<AppState>,
) -> Result<Response<LivenessResponse>, ApiError> {
    let database_latency_ms = state.service.health().await.map_err(|_| {
        ApiError::ServiceUnavailable("Database is unreachable".to_string())
    })?;

    Ok(Response::OK(LivenessResponse {
        status: "ok".to_string(),
        database_latency_ms,
    }))
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = DatabaseHealthStatus)
    ),
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<DatabaseHealthStatus>), ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    let code = if status.is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((code, Json(status)))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(live))
        .route(&format!("{}/health/ready", root_path), get(ready))
}
