// Common DTOs for public API
//
// These types are shared across multiple API endpoints.

use axum::http::StatusCode;
use axum::Json;
use microevents_core::EventError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned for storage faults. Store details only go to the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Convert to axum response tuple
    pub fn into_response(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }
}

/// Error half of every event handler
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a service outcome onto a status code and client-safe message.
pub fn event_error_response(err: EventError) -> ApiError {
    match err {
        EventError::Validation(msg) => ErrorResponse::new(msg).into_response(StatusCode::BAD_REQUEST),
        EventError::NotFound(_) => {
            ErrorResponse::new("Not found").into_response(StatusCode::NOT_FOUND)
        }
        EventError::Storage(e) => {
            tracing::error!("Event storage failure: {}", e);
            ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
                .into_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Response wrapper for list endpoints.
/// All list endpoints return responses wrapped in a `data` field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    /// Array of items returned by the list operation.
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}
