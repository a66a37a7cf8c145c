//! PostgreSQL implementation of the Kalyndr store gateway.

pub mod pg_event_store;
pub mod schema;

pub use pg_event_store::PgEventStore;
