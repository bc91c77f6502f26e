use crate::domain::user::User;
use crate::error::Result;
use crate::storage::records::UserRecord;
use sqlx::{Executor, Sqlite};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, Default)]
pub struct SessionRepository {}

impl SessionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Creates a new session record. Only the token HASH is stored.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn create<'e, E>(&self, executor: E, token_hash: &str, user_id: Uuid, ttl_days: i64) -> Result<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let now = OffsetDateTime::now_utc();
        let expires_at = now + time::Duration::days(ttl_days);

        sqlx::query(
            r"
            INSERT INTO sessions (token_hash, user_id, created_at, expires_at)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(token_hash)
        .bind(user_id)
        .bind(now)
        .bind(expires_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Resolves an unexpired session to its user in one join. A session whose
    /// user has been deleted no longer exists (cascade), so it resolves to `None`.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn find_user<'e, E>(&self, executor: E, token_hash: &str) -> Result<Option<User>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let record = sqlx::query_as::<_, UserRecord>(
            r"
            SELECT u.id, u.username, u.email, u.password_hash, u.created_at
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token_hash = ? AND s.expires_at > ?
            ",
        )
        .bind(token_hash)
        .bind(OffsetDateTime::now_utc())
        .fetch_optional(executor)
        .await?;

        Ok(record.map(User::from))
    }

    /// Removes a session record; deleting an absent token is not an error.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn delete<'e, E>(&self, executor: E, token_hash: &str) -> Result<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("DELETE FROM sessions WHERE token_hash = ?").bind(token_hash).execute(executor).await?;

        Ok(())
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn count_for_user<'e, E>(&self, executor: E, user_id: Uuid) -> Result<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
