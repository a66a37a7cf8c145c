//! Shared test mocks and utilities for the Kalyndr calendar backend.

mod store;

pub use store::{FailingEventStore, MemoryEventStore};
