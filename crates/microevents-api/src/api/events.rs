// Event HTTP routes

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use microevents_core::{ChangeStatus, CreateEvent, Event, EventService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::{event_error_response, ApiError, ErrorResponse, ListResponse};

/// Request to create a new event
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Identifier of the user the event belongs to. Also accepted as `user_id`.
    #[serde(default, alias = "user_id")]
    #[schema(example = 42)]
    pub owner: Option<i64>,
    /// Category of the event. Also accepted as `type`.
    #[serde(default, alias = "type")]
    #[schema(example = "test")]
    pub kind: Option<String>,
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(req: CreateEventRequest) -> Self {
        CreateEvent {
            owner: req.owner,
            kind: req.kind,
        }
    }
}

/// Request to change the status of an event
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ChangeStatusRequest {
    /// New status. Any non-empty value is accepted.
    #[serde(default)]
    #[schema(example = "done")]
    pub status: Option<String>,
    /// Optional message stored with the status. Omitted means empty.
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ChangeStatusRequest> for ChangeStatus {
    fn from(req: ChangeStatusRequest) -> Self {
        ChangeStatus {
            status: req.status,
            message: req.message,
        }
    }
}

/// Id of the event an operation was applied to
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventIdResponse {
    pub id: String,
}

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(service: Arc<EventService>) -> Self {
        Self { service }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/events", post(create_event))
        .route("/v1/events/owners/:owner", get(list_owner_events))
        .route("/v1/events/:event_id", post(change_status))
        .route("/v1/events/:event_id/seen", post(mark_seen))
        .with_state(state)
}

fn body_error(rejection: JsonRejection) -> ApiError {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    ErrorResponse::new(format!("Invalid request body: {}", rejection.body_text()))
        .into_response(StatusCode::BAD_REQUEST)
}

/// POST /v1/events - Create a new event
#[utoipa::path(
    post,
    path = "/v1/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = EventIdResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EventIdResponse>), ApiError> {
    let Json(req) = payload.map_err(body_error)?;

    let id = state
        .service
        .create_event(req.into())
        .await
        .map_err(event_error_response)?;

    Ok((StatusCode::CREATED, Json(EventIdResponse { id })))
}

/// GET /v1/events/owners/{owner} - List all events of an owner
#[utoipa::path(
    get,
    path = "/v1/events/owners/{owner}",
    params(
        ("owner" = i64, Path, description = "Owner (user) id")
    ),
    responses(
        (status = 200, description = "Events of the owner, possibly empty", body = ListResponse<Event>),
        (status = 400, description = "Owner is not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_owner_events(
    State(state): State<AppState>,
    owner: Result<Path<i64>, PathRejection>,
) -> Result<Json<ListResponse<Event>>, ApiError> {
    let Path(owner) = owner.map_err(|e| {
        tracing::warn!("Rejected owner path: {}", e.body_text());
        ErrorResponse::new("owner must be an integer").into_response(StatusCode::BAD_REQUEST)
    })?;

    let events = state
        .service
        .events_by_owner(owner)
        .await
        .map_err(event_error_response)?;

    Ok(Json(ListResponse::new(events)))
}

/// POST /v1/events/{event_id} - Change the status of an event
#[utoipa::path(
    post,
    path = "/v1/events/{event_id}",
    params(
        ("event_id" = String, Path, description = "Event ID")
    ),
    request_body = ChangeStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = EventIdResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn change_status(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    payload: Result<Json<ChangeStatusRequest>, JsonRejection>,
) -> Result<Json<EventIdResponse>, ApiError> {
    let Json(req) = payload.map_err(body_error)?;

    state
        .service
        .change_event_status(&event_id, req.into())
        .await
        .map_err(event_error_response)?;

    Ok(Json(EventIdResponse { id: event_id }))
}

/// POST /v1/events/{event_id}/seen - Mark an event as seen
#[utoipa::path(
    post,
    path = "/v1/events/{event_id}/seen",
    params(
        ("event_id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event marked as seen", body = EventIdResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn mark_seen(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventIdResponse>, ApiError> {
    state
        .service
        .mark_event_seen(&event_id)
        .await
        .map_err(event_error_response)?;

    Ok(Json(EventIdResponse { id: event_id }))
}
