use crate::api::AppState;
use crate::error::AppError;
use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, Request, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use serde::de::DeserializeOwned;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Name of the session cookie issued on signup and login.
pub const SESSION_COOKIE: &str = "soulspace_session";

/// Proof of authentication. Protected handlers take this extractor as an
/// argument; a request without a live session never reaches the handler body.
#[derive(Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(SESSION_COOKIE).ok_or(AppError::AuthError)?;

        let user = state.account_service.current_user(cookie.value()).await?;

        Ok(Self { user_id: user.id })
    }
}

/// `axum::extract::Path` with the rejection folded into the standard error
/// body. A path segment that does not parse as an id reads the same as a
/// missing row, so probing with malformed ids learns nothing.
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) =
            axum::extract::Path::<T>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::NotFound)?;

        Ok(Self(value))
    }
}

/// Propagates an incoming `x-request-id` or mints a fresh UUID for the request.
#[derive(Clone, Copy, Debug)]
pub struct MakeRequestUuidOrHeader;

impl MakeRequestId for MakeRequestUuidOrHeader {
    fn make_request_id<B>(&mut self, request: &Request<B>) -> Option<RequestId> {
        if let Some(id) = request.headers().get("x-request-id") {
            return Some(RequestId::new(id.clone()));
        }
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}
