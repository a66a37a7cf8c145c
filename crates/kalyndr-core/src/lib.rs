//! Kalyndr Core — shared domain types.
//!
//! This crate defines the calendar-event record, the store-gateway trait,
//! and the domain error type. It contains no infrastructure code.

pub mod error;
pub mod event;
pub mod store;
