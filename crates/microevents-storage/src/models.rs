// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use microevents_core::Event;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: String,
    pub owner: i64,
    pub kind: String,
    pub status: String,
    pub message: String,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            owner: row.owner,
            kind: row.kind,
            status: row.status,
            message: row.message,
            seen: row.seen,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
