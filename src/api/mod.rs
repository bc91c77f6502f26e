use crate::config::Config;
use crate::services::account_service::AccountService;
use crate::services::auth_service::AuthService;
use crate::services::capsule_service::TimeCapsuleService;
use crate::services::letter_service::LetterService;
use crate::services::note_service::UserNoteService;
use crate::services::soul_note_service::SoulNoteService;
use crate::storage::DbPool;
use crate::storage::capsule_repo::TimeCapsuleRepository;
use crate::storage::letter_repo::LetterRepository;
use crate::storage::note_repo::UserNoteRepository;
use crate::storage::session_repo::SessionRepository;
use crate::storage::soul_note_repo::SoulNoteRepository;
use crate::storage::user_repo::UserRepository;
use axum::body::Body;
use axum::http::Request;
use axum::response::Html;
use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod letters;
pub mod middleware;
pub mod schemas;
pub mod soul_notes;
pub mod time_capsules;
pub mod user_notes;
pub mod wellness;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub account_service: AccountService,
    pub letter_service: LetterService,
    pub capsule_service: TimeCapsuleService,
    pub note_service: UserNoteService,
    pub soul_note_service: SoulNoteService,
}

impl AppState {
    /// Wires repositories and services onto a ready pool.
    #[must_use]
    pub fn new(config: Config, pool: DbPool) -> Self {
        let user_repo = UserRepository::new();
        let session_repo = SessionRepository::new();
        let auth_service = AuthService::new(config.session.clone(), pool.clone(), session_repo);
        let account_service = AccountService::new(pool.clone(), user_repo, auth_service);

        let letter_service = LetterService::new(LetterRepository::new(pool.clone()));
        let capsule_service = TimeCapsuleService::new(TimeCapsuleRepository::new(pool.clone()));
        let note_service = UserNoteService::new(UserNoteRepository::new(pool.clone()));
        let soul_note_service = SoulNoteService::new(SoulNoteRepository::new(pool));

        Self { config, account_service, letter_service, capsule_service, note_service, soul_note_service }
    }
}

async fn index() -> Html<&'static str> {
    Html("<h1>SoulSpace API</h1>")
}

/// Configures and returns the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/check_session", get(auth::check_session))
        .route("/logout", delete(auth::logout))
        .route("/letters", get(letters::list_letters).post(letters::create_letter))
        .route(
            "/letters/{id}",
            get(letters::get_letter).patch(letters::update_letter).delete(letters::delete_letter),
        )
        .route(
            "/time_capsules",
            get(time_capsules::list_time_capsules).post(time_capsules::create_time_capsule),
        )
        .route(
            "/time_capsules/{id}",
            get(time_capsules::get_time_capsule)
                .patch(time_capsules::update_time_capsule)
                .delete(time_capsules::delete_time_capsule),
        )
        .route("/user_notes", get(user_notes::list_user_notes).post(user_notes::create_user_note))
        .route(
            "/user_notes/{id}",
            get(user_notes::get_user_note)
                .patch(user_notes::update_user_note)
                .delete(user_notes::delete_user_note),
        )
        .route("/soul_notes/random", get(soul_notes::random_soul_note))
        .route("/loop_breaker/prompt", get(wellness::loop_breaker_prompt))
        .route("/breath_ground", get(wellness::breath_ground))
        .layer(PropagateRequestIdLayer::new(axum::http::HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or_default())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        let status = response.status();
                        tracing::Span::current().record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(
            axum::http::HeaderName::from_static("x-request-id"),
            middleware::MakeRequestUuidOrHeader,
        ))
        .with_state(state)
}
