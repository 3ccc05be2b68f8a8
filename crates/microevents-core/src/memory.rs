// In-memory EventStore for dev mode and testing
// Decision: Use parking_lot for thread-safe access
//
// Mirrors the PostgreSQL store: ids are unique (a duplicate insert is a
// constraint violation), fetches come back in insertion order, and every
// mutation runs under a single write lock so it is atomic per record.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::StoreError;
use crate::event::{Event, NewEvent};
use crate::store::EventStore;

struct StoredEvent {
    // Insertion position, used to keep fetch order stable
    seq: u64,
    event: Event,
}

#[derive(Default)]
struct Inner {
    events: HashMap<String, StoredEvent>,
    next_seq: u64,
}

/// In-memory event store
///
/// All data is kept in memory and lost on restart.
#[derive(Default)]
pub struct InMemoryEventStore {
    inner: RwLock<Inner>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored events
    pub fn len(&self) -> usize {
        self.inner.read().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a single event by id (test helper, not part of the store contract)
    pub fn get(&self, id: &str) -> Option<Event> {
        self.inner.read().events.get(id).map(|s| s.event.clone())
    }

    // Timestamps never move backwards for a record, even if the wall clock does
    fn touch(previous: DateTime<Utc>) -> DateTime<Utc> {
        Utc::now().max(previous)
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, event: NewEvent) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        if inner.events.contains_key(&event.id) {
            return Err(StoreError::Constraint(format!(
                "duplicate event id: {}",
                event.id
            )));
        }

        let now = Utc::now();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.events.insert(
            event.id.clone(),
            StoredEvent {
                seq,
                event: Event {
                    id: event.id,
                    owner: event.owner,
                    kind: event.kind,
                    status: event.status,
                    message: event.message,
                    seen: false,
                    created_at: now,
                    updated_at: now,
                },
            },
        );
        Ok(())
    }

    async fn fetch_by_owner(&self, owner: i64) -> Result<Vec<Event>, StoreError> {
        let inner = self.inner.read();
        let mut matching: Vec<&StoredEvent> = inner
            .events
            .values()
            .filter(|s| s.event.owner == owner)
            .collect();
        matching.sort_by_key(|s| s.seq);
        Ok(matching.into_iter().map(|s| s.event.clone()).collect())
    }

    async fn change_status(
        &self,
        id: &str,
        status: &str,
        message: &str,
    ) -> Result<u64, StoreError> {
        let mut inner = self.inner.write();
        match inner.events.get_mut(id) {
            Some(stored) => {
                stored.event.status = status.to_string();
                stored.event.message = message.to_string();
                stored.event.updated_at = Self::touch(stored.event.updated_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn change_seen(&self, id: &str) -> Result<u64, StoreError> {
        let mut inner = self.inner.write();
        match inner.events.get_mut(id) {
            Some(stored) => {
                stored.event.seen = true;
                stored.event.updated_at = Self::touch(stored.event.updated_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_event(id: &str, owner: i64) -> NewEvent {
        NewEvent {
            id: id.to_string(),
            owner,
            kind: "test".to_string(),
            status: "new".to_string(),
            message: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch() {
        let store = InMemoryEventStore::new();
        store.create(new_event("a", 1)).await.unwrap();

        let events = store.fetch_by_owner(1).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "a");
        assert_eq!(events[0].status, "new");
        assert!(!events[0].seen);
        assert_eq!(events[0].created_at, events[0].updated_at);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_constraint_violation() {
        let store = InMemoryEventStore::new();
        store.create(new_event("a", 1)).await.unwrap();

        let err = store.create(new_event("a", 2)).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
        assert_eq!(store.len(), 1);
        assert!(store.fetch_by_owner(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_keeps_insertion_order() {
        let store = InMemoryEventStore::new();
        for id in ["c", "a", "b"] {
            store.create(new_event(id, 7)).await.unwrap();
        }
        store.create(new_event("other", 8)).await.unwrap();

        let ids: Vec<String> = store
            .fetch_by_owner(7)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_fetch_unknown_owner_is_empty() {
        let store = InMemoryEventStore::new();
        assert!(store.fetch_by_owner(404).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_change_status_counts() {
        let store = InMemoryEventStore::new();
        store.create(new_event("a", 1)).await.unwrap();

        assert_eq!(store.change_status("a", "done", "ok").await.unwrap(), 1);
        assert_eq!(store.change_status("missing", "done", "").await.unwrap(), 0);

        let event = store.get("a").unwrap();
        assert_eq!(event.status, "done");
        assert_eq!(event.message, "ok");
        assert!(event.updated_at >= event.created_at);
        assert!(store.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_change_seen_is_idempotent() {
        let store = InMemoryEventStore::new();
        store.create(new_event("a", 1)).await.unwrap();

        assert_eq!(store.change_seen("a").await.unwrap(), 1);
        assert_eq!(store.change_seen("a").await.unwrap(), 1);
        assert_eq!(store.change_seen("missing").await.unwrap(), 0);
        assert!(store.get("a").unwrap().seen);
        assert_eq!(store.len(), 1);
    }
}
