// Event service for business logic
//
// Validates inbound intent, assigns identity to new events and turns store
// results into outcomes. Holds no mutable state of its own: everything
// durable lives behind the EventStore, so concurrent calls never block each
// other here.

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::error::{EventError, Result};
use crate::event::{ChangeStatus, CreateEvent, Event, NewEvent, STATUS_NEW};
use crate::id::{IdGenerator, UuidV7Generator};
use crate::store::EventStore;
use crate::validation::{validate_kind, validate_message, validate_owner, validate_status};

pub struct EventService {
    store: Arc<dyn EventStore>,
    ids: Arc<dyn IdGenerator>,
}

impl EventService {
    /// Service with UUID v7 ids
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self::with_id_generator(store, Arc::new(UuidV7Generator))
    }

    pub fn with_id_generator(store: Arc<dyn EventStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Create an event with status "new". Returns the generated id.
    #[instrument(skip(self, input), fields(owner = ?input.owner, event_id = tracing::field::Empty))]
    pub async fn create_event(&self, input: CreateEvent) -> Result<String> {
        let (owner, kind) = match (validate_owner(input.owner), validate_kind(input.kind)) {
            (Ok(owner), Ok(kind)) => (owner, kind),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Rejected event creation");
                return Err(e);
            }
        };

        let id = self.ids.next_id();
        tracing::Span::current().record("event_id", id.as_str());

        self.store
            .create(NewEvent {
                id: id.clone(),
                owner,
                kind,
                status: STATUS_NEW.to_string(),
                message: String::new(),
            })
            .await?;

        debug!("Created event");
        Ok(id)
    }

    /// Move an existing event to the given status. Any non-empty status is allowed.
    #[instrument(skip(self, input))]
    pub async fn change_event_status(&self, id: &str, input: ChangeStatus) -> Result<()> {
        let (status, message) =
            match (validate_status(input.status), validate_message(input.message)) {
                (Ok(status), Ok(message)) => (status, message),
                (Err(e), _) | (_, Err(e)) => {
                    warn!(error = %e, "Rejected status change");
                    return Err(e);
                }
            };

        let affected = self.store.change_status(id, &status, &message).await?;
        Self::existence(id, affected)?;

        debug!(%status, "Changed event status");
        Ok(())
    }

    /// Mark an existing event as seen. Calling it again is a no-op that still succeeds.
    #[instrument(skip(self))]
    pub async fn mark_event_seen(&self, id: &str) -> Result<()> {
        let affected = self.store.change_seen(id).await?;
        Self::existence(id, affected)?;

        debug!("Marked event as seen");
        Ok(())
    }

    /// All events of an owner. An owner without events yields an empty list.
    #[instrument(skip(self))]
    pub async fn events_by_owner(&self, owner: i64) -> Result<Vec<Event>> {
        let events = self.store.fetch_by_owner(owner).await?;
        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    // The affected count is the only existence signal
    fn existence(id: &str, affected: u64) -> Result<()> {
        if affected == 0 {
            debug!(event_id = %id, "Event not found");
            return Err(EventError::not_found(id));
        }
        Ok(())
    }
}
