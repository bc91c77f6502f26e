use crate::domain::soul_note::SoulNote;
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::SoulNoteRecord;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct SoulNoteRepository {
    pool: DbPool,
}

impl SoulNoteRepository {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Picks one affirmation uniformly at random, or `None` when the pool is empty.
    /// SQLite's RANDOM() is not cryptographic, which is fine here.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn random(&self) -> Result<Option<SoulNote>> {
        let record = sqlx::query_as::<_, SoulNoteRecord>(
            r"
            SELECT id, message, category
            FROM soul_notes
            ORDER BY RANDOM()
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(SoulNote::from))
    }

    /// Inserts an affirmation. Only reachable from the out-of-band seeder;
    /// the API never writes to this table.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn create(&self, message: &str, category: Option<&str>) -> Result<SoulNote> {
        let note = SoulNote {
            id: Uuid::new_v4(),
            message: message.to_string(),
            category: category.map(ToString::to_string),
        };

        sqlx::query("INSERT INTO soul_notes (id, message, category) VALUES (?, ?, ?)")
            .bind(note.id)
            .bind(&note.message)
            .bind(note.category.as_deref())
            .execute(&self.pool)
            .await?;

        Ok(note)
    }
}
