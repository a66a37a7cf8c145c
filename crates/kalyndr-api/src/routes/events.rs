//! Calendar-event CRUD routes.
//!
//! Each handler is a direct pass-through to one store operation. There is
//! no validation, authorization, or field normalization in this layer;
//! malformed JSON is rejected by the extractor before a handler runs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use tracing::{info, instrument};

use kalyndr_core::error::DomainError;
use kalyndr_core::event::CalendarEvent;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /calendar
#[instrument(skip(state))]
async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    Ok(Json(state.store.find_all().await?))
}

/// GET /calendar/user/{user_id}
#[instrument(skip(state))]
async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    Ok(Json(state.store.find_by_user_id(&user_id).await?))
}

/// GET /calendar/id/{id}
#[instrument(skip(state))]
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CalendarEvent>, ApiError> {
    let event = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(DomainError::EventNotFound(id))?;
    Ok(Json(event))
}

/// POST /calendar
#[instrument(skip(state, event))]
async fn create(
    State(state): State<AppState>,
    Json(mut event): Json<CalendarEvent>,
) -> Result<Json<CalendarEvent>, ApiError> {
    // A create is always a fresh record; any id in the payload is ignored
    // and the store assigns one.
    event.id = 0;
    let saved = state.store.save(event).await?;
    info!(id = saved.id, "event created");
    Ok(Json(saved))
}

/// PUT /calendar/id/{id}
#[instrument(skip(state, event))]
async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut event): Json<CalendarEvent>,
) -> Result<Json<CalendarEvent>, ApiError> {
    // The path id wins over any id in the payload.
    event.id = id;
    let saved = state.store.save(event).await?;
    info!(id = saved.id, "event updated");
    Ok(Json(saved))
}

/// DELETE /calendar/id/{id}
#[instrument(skip(state))]
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    // No existence check; deleting an unknown id reports success.
    state.store.delete_by_id(id).await?;
    info!(id, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the calendar-event router, mounted under `/calendar`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all).post(create))
        .route("/user/{user_id}", get(list_by_user))
        .route(
            "/id/{id}",
            get(get_by_id).put(update_by_id).delete(delete_by_id),
        )
}
