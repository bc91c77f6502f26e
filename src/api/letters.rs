use crate::api::AppState;
use crate::api::middleware::{AuthUser, Path};
use crate::api::schemas::letters::{CreateLetter, LetterBody, UpdateLetter};
use crate::error::Result;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

pub async fn list_letters(auth_user: AuthUser, State(state): State<AppState>) -> Result<impl IntoResponse> {
    let letters = state.letter_service.list(auth_user.user_id).await?;

    Ok(Json(letters.into_iter().map(LetterBody::from).collect::<Vec<_>>()))
}

pub async fn create_letter(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateLetter>,
) -> Result<impl IntoResponse> {
    let letter = state.letter_service.create(auth_user.user_id, &payload.title, &payload.content).await?;

    Ok((StatusCode::CREATED, Json(LetterBody::from(letter))))
}

pub async fn get_letter(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let letter = state.letter_service.get(id, auth_user.user_id).await?;

    Ok(Json(LetterBody::from(letter)))
}

pub async fn update_letter(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLetter>,
) -> Result<impl IntoResponse> {
    let letter = state.letter_service.update(id, auth_user.user_id, payload.into()).await?;

    Ok(Json(LetterBody::from(letter)))
}

pub async fn delete_letter(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.letter_service.delete(id, auth_user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
