use crate::api::AppState;
use crate::api::schemas::soul_notes::SoulNoteBody;
use crate::error::Result;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Serves one random affirmation. An empty pool is reported as 204, never as
/// an error, so clients can tell "nothing seeded yet" apart from a failure.
pub async fn random_soul_note(State(state): State<AppState>) -> Result<Response> {
    match state.soul_note_service.random().await? {
        Some(note) => Ok(Json(SoulNoteBody::from(note)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
