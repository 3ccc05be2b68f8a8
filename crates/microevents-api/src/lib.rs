// micro-events API library
// Decision: Shared library for binaries (API server, OpenAPI export) and HTTP tests

use std::sync::Arc;

use axum::Router;
use microevents_core::EventService;

// API routes and types
pub mod api;

// Configuration and logging
pub mod config;
pub mod telemetry;

// OpenAPI spec generation
pub mod openapi;

/// Build the application router: health routes at the root, event routes
/// under `api_prefix`.
pub fn build_router(service: Arc<EventService>, storage: &'static str, api_prefix: &str) -> Router {
    let api_routes = api::events::routes(api::events::AppState::new(service));

    Router::new()
        .merge(api::health::routes(api::health::HealthState { storage }))
        .merge(build_router_with_prefix(api_routes, api_prefix))
}

/// Build router with optional API prefix (extracted for testing)
fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() || api_prefix == "/" {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
