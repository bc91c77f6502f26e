use crate::config::SessionConfig;
use crate::domain::user::{self, User};
use crate::error::{AppError, Result};
use crate::storage::DbPool;
use crate::storage::session_repo::SessionRepository;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use base64::Engine;
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Credential store and session manager. Passwords are argon2-hashed; session
/// tokens are opaque random strings, stored only as SHA-256 hex digests.
#[derive(Clone, Debug)]
pub struct AuthService {
    config: SessionConfig,
    pool: DbPool,
    session_repo: SessionRepository,
}

impl AuthService {
    #[must_use]
    pub fn new(config: SessionConfig, pool: DbPool, session_repo: SessionRepository) -> Self {
        Self { config, pool, session_repo }
    }

    /// Produces a salted one-way digest of the password.
    ///
    /// # Errors
    /// Returns `AppError::Validation` for passwords shorter than 6 characters,
    /// `AppError::Internal` if hashing itself fails.
    #[tracing::instrument(err, skip(self, password))]
    pub async fn hash_password(&self, password: &str) -> Result<String> {
        user::validate_password(password).map_err(AppError::Validation)?;

        let password = password.to_string();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            let argon2 = Argon2::default();
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map_err(|_| AppError::Internal)
                .map(|h| h.to_string())
        })
        .await
        .map_err(|_| AppError::Internal)?
    }

    /// Checks a candidate password against a stored digest. Any mismatch,
    /// including an unparseable digest, comes back as `false`.
    ///
    /// # Errors
    /// Returns `AppError::Internal` only if the blocking task is cancelled.
    #[tracing::instrument(err, skip(self, password, password_hash))]
    pub async fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        tokio::task::spawn_blocking(move || {
            let Ok(parsed_hash) = PasswordHash::new(&password_hash) else {
                return Ok(false);
            };
            Ok(Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok())
        })
        .await
        .map_err(|_| AppError::Internal)?
    }

    /// Establishes a session for the user and returns the plaintext token
    /// destined for the cookie. Only its hash touches the database.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    #[tracing::instrument(err, skip(self, conn), fields(user_id = %user_id))]
    pub async fn create_session(&self, conn: &mut SqliteConnection, user_id: Uuid) -> Result<String> {
        let token = Self::generate_opaque_token();
        let token_hash = Self::hash_opaque_token(&token);

        self.session_repo.create(conn, &token_hash, user_id, self.config.ttl_days).await?;

        Ok(token)
    }

    /// Resolves a session token to its user. A stale entry (expired, or left
    /// behind by anything other than the user-delete cascade) is cleared on sight.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn resolve_session(&self, token: &str) -> Result<Option<User>> {
        let token_hash = Self::hash_opaque_token(token);

        let mut conn = self.pool.acquire().await?;
        match self.session_repo.find_user(&mut *conn, &token_hash).await? {
            Some(user) => Ok(Some(user)),
            None => {
                self.session_repo.delete(&mut *conn, &token_hash).await?;
                Ok(None)
            }
        }
    }

    /// Destroys a session; unknown tokens are ignored, so logout is idempotent.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn destroy_session(&self, token: &str) -> Result<()> {
        let token_hash = Self::hash_opaque_token(token);
        let mut conn = self.pool.acquire().await?;
        self.session_repo.delete(&mut *conn, &token_hash).await?;
        Ok(())
    }

    fn generate_opaque_token() -> String {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
    }

    fn hash_opaque_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
