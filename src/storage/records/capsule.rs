use crate::domain::capsule::TimeCapsule;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub(crate) struct TimeCapsuleRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub open_date: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

impl From<TimeCapsuleRecord> for TimeCapsule {
    fn from(record: TimeCapsuleRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            message: record.message,
            open_date: record.open_date,
            created_at: record.created_at,
        }
    }
}
