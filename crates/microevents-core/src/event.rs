// Event domain types
//
// These types represent the Event entity and the inputs used to create and
// mutate it. Used by both the API and storage crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Status assigned to every event at creation.
pub const STATUS_NEW: &str = "new";

/// Event - a user-associated occurrence with a mutable status and seen flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Event {
    /// Unique identifier for the event. Assigned by the system.
    #[cfg_attr(feature = "openapi", schema(example = "01936f1e-8c3a-7b4e-9f2d-3a1b5c7d9e0f"))]
    pub id: String,
    /// Identifier of the user the event belongs to.
    #[cfg_attr(feature = "openapi", schema(example = 42))]
    pub owner: i64,
    /// Free-form category supplied at creation.
    #[cfg_attr(feature = "openapi", schema(example = "test"))]
    pub kind: String,
    /// Current status. Starts as "new".
    #[cfg_attr(feature = "openapi", schema(example = "done"))]
    pub status: String,
    /// Message attached by the last status change. Empty when none was given.
    pub message: String,
    /// Whether the owner has seen the event.
    pub seen: bool,
    /// Timestamp when the event was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation.
    pub updated_at: DateTime<Utc>,
}

/// Row handed to `EventStore::create`. Every field is populated by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub id: String,
    pub owner: i64,
    pub kind: String,
    pub status: String,
    pub message: String,
}

/// Input for creating an event. Fields are optional so that missing values
/// surface as validation errors rather than decode failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEvent {
    pub owner: Option<i64>,
    pub kind: Option<String>,
}

impl CreateEvent {
    pub fn new(owner: i64, kind: impl Into<String>) -> Self {
        Self {
            owner: Some(owner),
            kind: Some(kind.into()),
        }
    }
}

/// Input for changing the status of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeStatus {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl ChangeStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
