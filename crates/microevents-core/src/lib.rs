// Event lifecycle core
//
// Key design decisions:
// - The service only sees the EventStore trait (Postgres and in-memory backends)
// - Mutations report affected-row counts; a zero count is the not-found signal
// - Ids come from an injected IdGenerator
// - Status values are free-form; no transition table is enforced

pub mod error;
pub mod event;
pub mod id;
pub mod memory;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{EventError, Result, StoreError};
pub use event::{ChangeStatus, CreateEvent, Event, NewEvent, STATUS_NEW};
pub use id::{IdGenerator, SequentialIdGenerator, UuidV7Generator};
pub use memory::InMemoryEventStore;
pub use service::EventService;
pub use store::EventStore;
