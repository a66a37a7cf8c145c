//! Store-gateway abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::event::CalendarEvent;

/// Persistence gateway for calendar events.
///
/// Implementations perform a single attempt per operation; connectivity
/// failures surface as `DomainError::Infrastructure`.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Load every stored event. Unbounded; ordering is not significant.
    async fn find_all(&self) -> Result<Vec<CalendarEvent>, DomainError>;

    /// Load one event by id. `None` when no such row exists — absence is
    /// not an error at this boundary.
    async fn find_by_id(&self, id: i64) -> Result<Option<CalendarEvent>, DomainError>;

    /// Load every event whose `user_id` equals `user_id` exactly
    /// (case-sensitive). Empty when none match.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<CalendarEvent>, DomainError>;

    /// Insert when `event.id == 0` (the store assigns the id), otherwise
    /// overwrite-by-id with upsert semantics. Returns the persisted
    /// record, including any store-assigned id.
    async fn save(&self, event: CalendarEvent) -> Result<CalendarEvent, DomainError>;

    /// Remove the event with the given id. Idempotent; deleting an id
    /// that does not exist succeeds.
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}
