// Storage layer for micro-events
// Decision: PostgreSQL via sqlx; the in-memory store lives in microevents-core
//
// This crate provides database implementations for core traits:
// - PgEventStore: implements EventStore for event persistence

pub mod error;
pub mod event_store;
pub mod models;

pub use error::map_sqlx_error;
pub use event_store::{PgEventStore, PoolConfig};
pub use models::EventRow;
