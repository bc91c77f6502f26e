use crate::api::AppState;
use crate::api::middleware::{AuthUser, Path};
use crate::api::schemas::time_capsules::{CreateTimeCapsule, TimeCapsuleBody, UpdateTimeCapsule};
use crate::error::Result;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

pub async fn list_time_capsules(auth_user: AuthUser, State(state): State<AppState>) -> Result<impl IntoResponse> {
    let capsules = state.capsule_service.list(auth_user.user_id).await?;

    Ok(Json(capsules.into_iter().map(TimeCapsuleBody::from).collect::<Vec<_>>()))
}

pub async fn create_time_capsule(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateTimeCapsule>,
) -> Result<impl IntoResponse> {
    let capsule = state.capsule_service.create(auth_user.user_id, &payload.message, &payload.open_date).await?;

    Ok((StatusCode::CREATED, Json(TimeCapsuleBody::from(capsule))))
}

pub async fn get_time_capsule(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let capsule = state.capsule_service.get(id, auth_user.user_id).await?;

    Ok(Json(TimeCapsuleBody::from(capsule)))
}

pub async fn update_time_capsule(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTimeCapsule>,
) -> Result<impl IntoResponse> {
    let capsule = state.capsule_service.update(id, auth_user.user_id, payload.into()).await?;

    Ok(Json(TimeCapsuleBody::from(capsule)))
}

pub async fn delete_time_capsule(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.capsule_service.delete(id, auth_user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
