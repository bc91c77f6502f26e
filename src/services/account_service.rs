use crate::domain::user::{self, User};
use crate::error::{AppError, Result};
use crate::services::auth_service::AuthService;
use crate::storage::DbPool;
use crate::storage::user_repo::UserRepository;

#[derive(Debug)]
pub struct SignupParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Orchestrates signup, login, session checks and logout on top of the
/// credential store and the user repository.
#[derive(Clone, Debug)]
pub struct AccountService {
    pool: DbPool,
    user_repo: UserRepository,
    auth_service: AuthService,
}

impl AccountService {
    #[must_use]
    pub fn new(pool: DbPool, user_repo: UserRepository, auth_service: AuthService) -> Self {
        Self { pool, user_repo, auth_service }
    }

    /// Registers a new user and establishes a session in the same transaction;
    /// signup implies login. Returns the user and the plaintext session token.
    ///
    /// # Errors
    /// Returns `AppError::Validation` when a field rule or the confirmation
    /// check fails; nothing is written in that case.
    #[tracing::instrument(
        skip(self, params),
        fields(user_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn signup(&self, params: SignupParams) -> Result<(User, String)> {
        let SignupParams { username, email, password, password_confirmation } = params;

        if username.is_empty() || email.is_empty() || password.is_empty() || password_confirmation.is_empty() {
            return Err(AppError::Validation(
                "All fields are required: username, email, password, password confirmation.".to_string(),
            ));
        }
        if password != password_confirmation {
            return Err(AppError::Validation("Passwords do not match.".to_string()));
        }
        user::validate_username(&username).map_err(AppError::Validation)?;
        user::validate_email(&email).map_err(AppError::Validation)?;

        let password_hash = self.auth_service.hash_password(&password).await?;

        let mut tx = self.pool.begin().await?;

        if self.user_repo.username_exists(&mut *tx, &username).await? {
            return Err(AppError::Validation("Username already taken.".to_string()));
        }
        if self.user_repo.email_exists(&mut *tx, &email).await? {
            return Err(AppError::Validation("Email already in use.".to_string()));
        }

        let created = self.user_repo.create(&mut *tx, &username, &email, &password_hash).await?;

        tracing::Span::current().record("user_id", tracing::field::display(created.id));

        let token = self.auth_service.create_session(&mut tx, created.id).await?;

        tx.commit().await?;

        tracing::info!("User signed up");

        Ok((created, token))
    }

    /// Authenticates by username or email and establishes a session.
    ///
    /// Matching is case-insensitive on both columns, consistent with the
    /// uniqueness rules. Unknown identifier and wrong password produce the
    /// same `AuthError`, so callers cannot probe for accounts.
    ///
    /// # Errors
    /// Returns `AppError::AuthError` on any credential mismatch.
    #[tracing::instrument(
        skip(self, identifier, password),
        fields(user_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn login(&self, identifier: String, password: String) -> Result<(User, String)> {
        if identifier.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Identifier (username or email) and password are required.".to_string(),
            ));
        }

        let mut conn = self.pool.acquire().await?;
        let Some(found) = self.user_repo.find_by_identifier(&mut *conn, &identifier).await? else {
            tracing::warn!("Login failed: user not found");
            return Err(AppError::AuthError);
        };
        drop(conn);

        tracing::Span::current().record("user_id", tracing::field::display(found.id));

        let is_valid = self.auth_service.verify_password(&password, &found.password_hash).await?;
        if !is_valid {
            tracing::warn!("Login failed: invalid password");
            return Err(AppError::AuthError);
        }

        let mut tx = self.pool.begin().await?;
        let token = self.auth_service.create_session(&mut tx, found.id).await?;
        tx.commit().await?;

        tracing::info!("User logged in");

        Ok((found, token))
    }

    /// Resolves the session token from the cookie to a user record.
    ///
    /// # Errors
    /// Returns `AppError::AuthError` when the session is absent or stale.
    pub async fn current_user(&self, token: &str) -> Result<User> {
        self.auth_service.resolve_session(token).await?.ok_or(AppError::AuthError)
    }

    /// Drops the session unconditionally. Calling it without one is not an error.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn logout(&self, token: &str) -> Result<()> {
        self.auth_service.destroy_session(token).await?;
        tracing::info!("User logged out");
        Ok(())
    }
}
