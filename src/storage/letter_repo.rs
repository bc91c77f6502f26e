use crate::domain::letter::Letter;
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::LetterRecord;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct LetterRepository {
    pool: DbPool,
}

impl LetterRepository {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Lists a user's letters, newest first.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Letter>> {
        let records = sqlx::query_as::<_, LetterRecord>(
            r"
            SELECT id, user_id, title, content, created_at
            FROM letters
            WHERE user_id = ?
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Letter::from).collect())
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn create(&self, user_id: Uuid, title: &str, content: &str) -> Result<Letter> {
        let letter = Letter {
            id: Uuid::new_v4(),
            user_id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r"
            INSERT INTO letters (id, user_id, title, content, created_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(letter.id)
        .bind(letter.user_id)
        .bind(&letter.title)
        .bind(&letter.content)
        .bind(letter.created_at)
        .execute(&self.pool)
        .await?;

        Ok(letter)
    }

    /// Fetches one letter scoped to its owner. A miss and a foreign row are
    /// indistinguishable to the caller.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Letter>> {
        let record = sqlx::query_as::<_, LetterRecord>(
            r"
            SELECT id, user_id, title, content, created_at
            FROM letters
            WHERE id = ? AND user_id = ?
            ",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Letter::from))
    }

    /// Writes back patched fields, still scoped to the owner.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn update_owned(&self, letter: &Letter) -> Result<bool> {
        let result = sqlx::query(
            r"
            UPDATE letters
            SET title = ?, content = ?
            WHERE id = ? AND user_id = ?
            ",
        )
        .bind(&letter.title)
        .bind(&letter.content)
        .bind(letter.id)
        .bind(letter.user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM letters WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
