use crate::domain::note::UserNote;
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::UserNoteRecord;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserNoteRepository {
    pool: DbPool,
}

impl UserNoteRepository {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Lists a user's notes, newest first.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserNote>> {
        let records = sqlx::query_as::<_, UserNoteRecord>(
            r"
            SELECT id, user_id, content, created_at
            FROM user_notes
            WHERE user_id = ?
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(UserNote::from).collect())
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn create(&self, user_id: Uuid, content: &str) -> Result<UserNote> {
        let note = UserNote {
            id: Uuid::new_v4(),
            user_id,
            content: content.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r"
            INSERT INTO user_notes (id, user_id, content, created_at)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(note.id)
        .bind(note.user_id)
        .bind(&note.content)
        .bind(note.created_at)
        .execute(&self.pool)
        .await?;

        Ok(note)
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<UserNote>> {
        let record = sqlx::query_as::<_, UserNoteRecord>(
            r"
            SELECT id, user_id, content, created_at
            FROM user_notes
            WHERE id = ? AND user_id = ?
            ",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(UserNote::from))
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn update_owned(&self, note: &UserNote) -> Result<bool> {
        let result = sqlx::query(
            r"
            UPDATE user_notes
            SET content = ?
            WHERE id = ? AND user_id = ?
            ",
        )
        .bind(&note.content)
        .bind(note.id)
        .bind(note.user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM user_notes WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
