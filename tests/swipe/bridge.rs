use super::support::Fixture;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use swipelist::swipe::{ActionError, ActionHandler, PointerEvent, RowKey};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

struct RecordingHandler {
    calls: UnboundedSender<RowKey>,
}

#[async_trait]
impl ActionHandler for RecordingHandler {
    async fn invoke(&self, id: RowKey) -> Result<(), ActionError> {
        let _ = self.calls.send(id);
        Ok(())
    }
}

struct FailingHandler {
    attempts: Arc<AtomicUsize>,
}

#[async_trait]
impl ActionHandler for FailingHandler {
    async fn invoke(&self, _id: RowKey) -> Result<(), ActionError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ActionError::Rejected("item is locked".to_string()))
    }
}

fn recording() -> (Arc<RecordingHandler>, UnboundedReceiver<RowKey>) {
    let (tx, rx) = unbounded_channel();
    (Arc::new(RecordingHandler { calls: tx }), rx)
}

async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_action_tap_dispatches_id_once_and_closes_row() {
    let mut fixture = Fixture::new();
    let row = fixture.add_row("7");
    let (handler, mut calls) = recording();
    fixture.controller.register_action_handler(handler);
    fixture.open(row);

    let action = fixture.action(row);
    let outcome = fixture.controller.handle_pointer(PointerEvent::click(Some(action)));

    assert!(outcome.propagation_stopped);
    assert!(outcome.default_prevented);
    assert!(!fixture.is_open(row));
    assert_eq!(fixture.controller.open_row(), None);

    let id = tokio::time::timeout(Duration::from_secs(1), calls.recv()).await.unwrap();
    assert_eq!(id, Some(7));
    settle().await;
    assert!(calls.try_recv().is_err());
}

#[tokio::test]
async fn test_malformed_identifier_is_not_dispatched() {
    let mut fixture = Fixture::new();
    let row = fixture.add_row("seven");
    let (handler, mut calls) = recording();
    fixture.controller.register_action_handler(handler);
    fixture.open(row);

    let action = fixture.action(row);
    let outcome = fixture.controller.handle_pointer(PointerEvent::click(Some(action)));

    assert!(outcome.propagation_stopped);
    assert!(!fixture.is_open(row));
    settle().await;
    assert!(calls.try_recv().is_err());
}

#[test]
fn test_tap_without_registered_handler_still_closes_row() {
    let mut fixture = Fixture::new();
    let row = fixture.add_row("7");
    fixture.open(row);
    assert!(!fixture.controller.has_action_handler());

    let action = fixture.action(row);
    let outcome = fixture.controller.handle_pointer(PointerEvent::click(Some(action)));

    assert!(outcome.propagation_stopped);
    assert!(!fixture.is_open(row));
}

#[test]
fn test_tap_outside_runtime_is_dropped() {
    let mut fixture = Fixture::new();
    let row = fixture.add_row("7");
    let attempts = Arc::new(AtomicUsize::new(0));
    fixture.controller.register_action_handler(Arc::new(FailingHandler {
        attempts: attempts.clone(),
    }));
    fixture.open(row);

    let action = fixture.action(row);
    fixture.controller.handle_pointer(PointerEvent::click(Some(action)));

    assert!(!fixture.is_open(row));
    assert_eq!(attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_handler_failure_does_not_reopen_row() {
    let mut fixture = Fixture::new();
    let row = fixture.add_row("3");
    let attempts = Arc::new(AtomicUsize::new(0));
    fixture.controller.register_action_handler(Arc::new(FailingHandler {
        attempts: attempts.clone(),
    }));
    fixture.open(row);

    let action = fixture.action(row);
    fixture.controller.handle_pointer(PointerEvent::click(Some(action)));

    for _ in 0..100 {
        if attempts.load(Ordering::SeqCst) > 0 {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert!(!fixture.is_open(row));
}

#[tokio::test]
async fn test_reregistration_replaces_handler() {
    let mut fixture = Fixture::new();
    let row = fixture.add_row("5");
    let (first, mut first_calls) = recording();
    let (second, mut second_calls) = recording();
    fixture.controller.register_action_handler(first);
    fixture.controller.register_action_handler(second);
    fixture.open(row);

    let action = fixture.action(row);
    fixture.controller.handle_pointer(PointerEvent::click(Some(action)));

    let id = tokio::time::timeout(Duration::from_secs(1), second_calls.recv()).await.unwrap();
    assert_eq!(id, Some(5));
    assert!(first_calls.try_recv().is_err());
}
