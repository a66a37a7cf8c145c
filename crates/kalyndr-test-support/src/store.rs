//! Test stores — mock `EventStore` implementations for tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use kalyndr_core::error::DomainError;
use kalyndr_core::event::CalendarEvent;
use kalyndr_core::store::EventStore;

#[derive(Debug, Default)]
struct Inner {
    events: BTreeMap<i64, CalendarEvent>,
    next_id: i64,
}

/// An in-memory event store with the same observable semantics as the
/// PostgreSQL implementation: insert-on-zero-id with monotonic id
/// assignment, overwrite-by-id otherwise, exact-match user filter, and
/// idempotent delete.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    inner: Mutex<Inner>,
}

impl MemoryEventStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored events.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().events.len()
    }

    /// Returns true when no events are stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn find_all(&self) -> Result<Vec<CalendarEvent>, DomainError> {
        Ok(self.inner.lock().unwrap().events.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CalendarEvent>, DomainError> {
        Ok(self.inner.lock().unwrap().events.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<CalendarEvent>, DomainError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .events
            .values()
            .filter(|event| event.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn save(&self, mut event: CalendarEvent) -> Result<CalendarEvent, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        if event.is_new() {
            inner.next_id += 1;
            event.id = inner.next_id;
        }
        inner.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        self.inner.lock().unwrap().events.remove(&id);
        Ok(())
    }
}

/// An event store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingEventStore;

#[async_trait]
impl EventStore for FailingEventStore {
    async fn find_all(&self) -> Result<Vec<CalendarEvent>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<CalendarEvent>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find_by_user_id(&self, _user_id: &str) -> Result<Vec<CalendarEvent>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn save(&self, _event: CalendarEvent) -> Result<CalendarEvent, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
