use crate::domain::capsule::TimeCapsule;
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::TimeCapsuleRecord;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct TimeCapsuleRepository {
    pool: DbPool,
}

impl TimeCapsuleRepository {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Lists a user's capsules, soonest-to-open first.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<TimeCapsule>> {
        let records = sqlx::query_as::<_, TimeCapsuleRecord>(
            r"
            SELECT id, user_id, message, open_date, created_at
            FROM time_capsules
            WHERE user_id = ?
            ORDER BY open_date ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(TimeCapsule::from).collect())
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn create(&self, user_id: Uuid, message: &str, open_date: OffsetDateTime) -> Result<TimeCapsule> {
        let capsule = TimeCapsule {
            id: Uuid::new_v4(),
            user_id,
            message: message.to_string(),
            open_date,
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r"
            INSERT INTO time_capsules (id, user_id, message, open_date, created_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(capsule.id)
        .bind(capsule.user_id)
        .bind(&capsule.message)
        .bind(capsule.open_date)
        .bind(capsule.created_at)
        .execute(&self.pool)
        .await?;

        Ok(capsule)
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<TimeCapsule>> {
        let record = sqlx::query_as::<_, TimeCapsuleRecord>(
            r"
            SELECT id, user_id, message, open_date, created_at
            FROM time_capsules
            WHERE id = ? AND user_id = ?
            ",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(TimeCapsule::from))
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn update_owned(&self, capsule: &TimeCapsule) -> Result<bool> {
        let result = sqlx::query(
            r"
            UPDATE time_capsules
            SET message = ?, open_date = ?
            WHERE id = ? AND user_id = ?
            ",
        )
        .bind(&capsule.message)
        .bind(capsule.open_date)
        .bind(capsule.id)
        .bind(capsule.user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM time_capsules WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
