// EventStore - the persistence seam
//
// The service only ever talks to this trait:
// - PgEventStore (microevents-storage) for production
// - InMemoryEventStore for dev mode and tests

use async_trait::async_trait;

use crate::error::StoreError;
use crate::event::{Event, NewEvent};

/// Persistence for event records.
///
/// Mutations are single conditional statements. They return the number of
/// records they changed, and that count is the only existence signal: there is
/// no separate "does it exist" probe, so two racing writers can never disagree
/// about whether the record was there at the moment of the write.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait EventStore: Send + Sync + 'static {
    /// Insert a new record. `seen` starts false; timestamps are set by the store.
    async fn create(&self, event: NewEvent) -> Result<(), StoreError>;

    /// All events of `owner` in insertion order. Empty when there are none.
    async fn fetch_by_owner(&self, owner: i64) -> Result<Vec<Event>, StoreError>;

    /// Set `status` and `message` on the record with `id`.
    /// Returns 0 when no record matches.
    async fn change_status(&self, id: &str, status: &str, message: &str)
        -> Result<u64, StoreError>;

    /// Set `seen = true` on the record with `id`, whatever its previous value.
    /// Returns 0 when no record matches.
    async fn change_seen(&self, id: &str) -> Result<u64, StoreError>;
}
