use crate::api::AppState;
use crate::api::middleware::SESSION_COOKIE;
use crate::api::schemas::auth::{Login, Signup, UserBody};
use crate::config::SessionConfig;
use crate::error::{AppError, Result};
use crate::services::account_service::SignupParams;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<Signup>,
) -> Result<impl IntoResponse> {
    let params = SignupParams {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        password_confirmation: payload.password_confirmation,
    };
    let (created, token) = state.account_service.signup(params).await?;

    let jar = jar.add(session_cookie(&state.config.session, token));
    Ok((StatusCode::CREATED, jar, Json(UserBody::from(created))))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<Login>,
) -> Result<impl IntoResponse> {
    let (user, token) = state.account_service.login(payload.identifier, payload.password).await?;

    let jar = jar.add(session_cookie(&state.config.session, token));
    Ok((jar, Json(UserBody::from(user))))
}

pub async fn check_session(State(state): State<AppState>, jar: CookieJar) -> Result<impl IntoResponse> {
    let cookie = jar.get(SESSION_COOKIE).ok_or(AppError::AuthError)?;
    let user = state.account_service.current_user(cookie.value()).await?;

    Ok(Json(UserBody::from(user)))
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Result<impl IntoResponse> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.account_service.logout(cookie.value()).await?;
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    Ok((StatusCode::NO_CONTENT, jar))
}

fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(config.secure_cookies)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::days(config.ttl_days))
        .build()
}
