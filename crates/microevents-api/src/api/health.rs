// Liveness and health endpoints (served outside the API prefix)

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Active storage backend: "postgres" or "memory"
    pub storage: String,
}

/// State for health endpoint
#[derive(Clone)]
pub struct HealthState {
    pub storage: &'static str,
}

pub fn routes(state: HealthState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
        .with_state(state)
}

/// GET /ping - Liveness probe
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Server is alive", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn ping() -> &'static str {
    "pong"
}

/// GET /health - Service health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.storage.to_string(),
    })
}
