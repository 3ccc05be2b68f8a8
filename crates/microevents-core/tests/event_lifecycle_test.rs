// Event lifecycle tests against the in-memory store
//
// Run with: cargo test -p microevents-core --test event_lifecycle_test

use std::collections::HashSet;
use std::sync::Arc;

use microevents_core::{
    ChangeStatus, CreateEvent, EventService, EventStore, InMemoryEventStore, STATUS_NEW,
};

fn setup() -> (EventService, Arc<InMemoryEventStore>) {
    let store = Arc::new(InMemoryEventStore::new());
    (EventService::new(store.clone()), store)
}

#[tokio::test]
async fn test_full_event_lifecycle() {
    let (service, _store) = setup();

    // Step 1: create
    let id = service
        .create_event(CreateEvent::new(42, "test"))
        .await
        .expect("create should succeed");

    // Step 2: change status
    service
        .change_event_status(&id, ChangeStatus::new("done"))
        .await
        .expect("status change should succeed");

    let events = service.events_by_owner(42).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id);
    assert_eq!(events[0].status, "done");
    assert_eq!(events[0].message, "");
    assert!(!events[0].seen);

    // Step 3: mark seen
    service.mark_event_seen(&id).await.expect("seen should succeed");

    let events = service.events_by_owner(42).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].status, "done");
    assert!(events[0].seen);
}

#[tokio::test]
async fn test_created_ids_are_fresh() {
    let (service, _store) = setup();
    let mut seen_ids = HashSet::new();

    for i in 0..50 {
        let owner = i % 5;
        let id = service
            .create_event(CreateEvent::new(owner, format!("kind-{}", i)))
            .await
            .unwrap();
        assert!(seen_ids.insert(id.clone()), "id {} returned twice", id);

        let matching: Vec<_> = service
            .events_by_owner(owner)
            .await
            .unwrap()
            .into_iter()
            .filter(|e| e.id == id)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].status, STATUS_NEW);
        assert_eq!(matching[0].owner, owner);
        assert_eq!(matching[0].kind, format!("kind-{}", i));
    }
}

#[tokio::test]
async fn test_unknown_id_is_not_found_and_creates_nothing() {
    let (service, store) = setup();
    let id = service
        .create_event(CreateEvent::new(7, "test"))
        .await
        .unwrap();

    let err = service
        .change_event_status("nonexistent-id", ChangeStatus::new("done"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(service
        .mark_event_seen("nonexistent-id")
        .await
        .unwrap_err()
        .is_not_found());

    assert_eq!(store.len(), 1);
    let events = service.events_by_owner(7).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id);
    assert_eq!(events[0].status, STATUS_NEW);
    assert!(!events[0].seen);
}

#[tokio::test]
async fn test_mark_seen_twice_changes_nothing_else() {
    let (service, store) = setup();
    let id = service
        .create_event(CreateEvent::new(3, "reminder"))
        .await
        .unwrap();
    service
        .change_event_status(&id, ChangeStatus::new("sent").with_message("via email"))
        .await
        .unwrap();
    let before = store.get(&id).unwrap();

    service.mark_event_seen(&id).await.unwrap();
    service.mark_event_seen(&id).await.unwrap();

    let after = store.get(&id).unwrap();
    assert!(after.seen);
    assert_eq!(after.id, before.id);
    assert_eq!(after.owner, before.owner);
    assert_eq!(after.kind, before.kind);
    assert_eq!(after.status, before.status);
    assert_eq!(after.message, before.message);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn test_invalid_input_performs_no_mutation() {
    let (service, store) = setup();
    let id = service
        .create_event(CreateEvent::new(5, "test"))
        .await
        .unwrap();

    let err = service
        .create_event(CreateEvent {
            owner: Some(5),
            kind: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = service
        .change_event_status(
            &id,
            ChangeStatus {
                status: None,
                message: Some("ignored".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_validation());

    assert_eq!(store.len(), 1);
    let event = store.get(&id).unwrap();
    assert_eq!(event.status, STATUS_NEW);
    assert_eq!(event.message, "");
}

#[tokio::test]
async fn test_concurrent_updates_to_same_event() {
    let (service, store) = setup();
    let service = Arc::new(service);
    let id = service
        .create_event(CreateEvent::new(9, "race"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..20 {
        let service = service.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                service
                    .change_event_status(&id, ChangeStatus::new(format!("status-{}", i)))
                    .await
            } else {
                service.mark_event_seen(&id).await
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("every update targets an existing event");
    }

    let events = store.fetch_by_owner(9).await.unwrap();
    assert_eq!(events.len(), 1);
    assert!(events[0].seen);
    assert!(events[0].status.starts_with("status-"));
    assert!(events[0].updated_at >= events[0].created_at);
}
