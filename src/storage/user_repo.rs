use crate::domain::user::User;
use crate::error::Result;
use crate::storage::records::UserRecord;
use sqlx::{Executor, Sqlite};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, Default)]
pub struct UserRepository {}

impl UserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Inserts a new user row. The password is expected to arrive already hashed.
    ///
    /// # Errors
    /// Returns `AppError::Database` on constraint violations or connection failure.
    pub async fn create<'e, E>(&self, executor: E, username: &str, email: &str, password_hash: &str) -> Result<User>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(executor)
        .await?;

        Ok(user)
    }

    /// Looks up a user by username or email. Matching is case-insensitive,
    /// consistent with the uniqueness rules on both columns.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn find_by_identifier<'e, E>(&self, executor: E, identifier: &str) -> Result<Option<User>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let record = sqlx::query_as::<_, UserRecord>(
            r"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = ? COLLATE NOCASE OR email = ? COLLATE NOCASE
            ",
        )
        .bind(identifier)
        .bind(identifier)
        .fetch_optional(executor)
        .await?;

        Ok(record.map(User::from))
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn username_exists<'e, E>(&self, executor: E, username: &str) -> Result<bool>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ? COLLATE NOCASE")
            .bind(username)
            .fetch_one(executor)
            .await?;

        Ok(count > 0)
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn email_exists<'e, E>(&self, executor: E, email: &str) -> Result<bool>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ? COLLATE NOCASE")
            .bind(email)
            .fetch_one(executor)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a user row; letters, time capsules, user notes and sessions
    /// go with it via `ON DELETE CASCADE`.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn delete<'e, E>(&self, executor: E, user_id: Uuid) -> Result<bool>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM users WHERE id = ?").bind(user_id).execute(executor).await?;

        Ok(result.rows_affected() > 0)
    }
}
