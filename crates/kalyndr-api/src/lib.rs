//! Kalyndr API — HTTP layer over the event store.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the application router. Used by the binary entry point and by
/// the integration tests so both exercise the same route surface.
///
/// Cross-origin requests are accepted from any origin; the original
/// frontends are served from arbitrary hosts.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/calendar", routes::events::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
