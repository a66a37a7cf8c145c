//! Liveness probe.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by the liveness probe.
#[derive(Serialize)]
pub struct Health {
    /// Always `ok` while the process is accepting requests.
    pub status: &'static str,
    /// Service name. Useful when the Cal and Kalyndr deployments of this
    /// binary answer side by side and need telling apart.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// GET /health — reports process liveness only; the store is not touched.
async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns the liveness router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
