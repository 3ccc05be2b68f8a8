// OpenAPI specification generation
//
// Used by the server (for Swagger UI) and by the export-openapi binary.

use crate::api;
use crate::api::{ErrorResponse, ListResponse};
use microevents_core::Event;
use utoipa::OpenApi;

/// OpenAPI documentation for the micro-events API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::events::create_event,
        api::events::list_owner_events,
        api::events::change_status,
        api::events::mark_seen,
        api::health::ping,
        api::health::health,
    ),
    components(
        schemas(
            Event,
            api::events::CreateEventRequest,
            api::events::ChangeStatusRequest,
            api::events::EventIdResponse,
            api::health::HealthResponse,
            ErrorResponse,
            ListResponse<Event>,
        )
    ),
    tags(
        (name = "events", description = "Event lifecycle endpoints"),
        (name = "health", description = "Liveness and health endpoints")
    ),
    info(
        title = "micro-events API",
        version = "0.1.0",
        description = "API for creating events and tracking their status and seen flag",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> String {
        Self::openapi()
            .to_pretty_json()
            .expect("Failed to serialize OpenAPI spec")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_event_paths() {
        let spec: serde_json::Value = serde_json::from_str(&ApiDoc::to_json()).unwrap();
        let paths = spec["paths"].as_object().unwrap();
        assert!(paths.contains_key("/v1/events"));
        assert!(paths.contains_key("/v1/events/owners/{owner}"));
        assert!(paths.contains_key("/v1/events/{event_id}"));
        assert!(paths.contains_key("/v1/events/{event_id}/seen"));
        assert!(paths.contains_key("/ping"));
    }
}
