use crate::api::AppState;
use crate::api::middleware::{AuthUser, Path};
use crate::api::schemas::user_notes::{CreateUserNote, UpdateUserNote, UserNoteBody};
use crate::error::Result;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

pub async fn list_user_notes(auth_user: AuthUser, State(state): State<AppState>) -> Result<impl IntoResponse> {
    let notes = state.note_service.list(auth_user.user_id).await?;

    Ok(Json(notes.into_iter().map(UserNoteBody::from).collect::<Vec<_>>()))
}

pub async fn create_user_note(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateUserNote>,
) -> Result<impl IntoResponse> {
    let note = state.note_service.create(auth_user.user_id, &payload.content).await?;

    Ok((StatusCode::CREATED, Json(UserNoteBody::from(note))))
}

pub async fn get_user_note(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let note = state.note_service.get(id, auth_user.user_id).await?;

    Ok(Json(UserNoteBody::from(note)))
}

pub async fn update_user_note(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserNote>,
) -> Result<impl IntoResponse> {
    let note = state.note_service.update(id, auth_user.user_id, payload.into()).await?;

    Ok(Json(UserNoteBody::from(note)))
}

pub async fn delete_user_note(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.note_service.delete(id, auth_user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
