use crate::domain::letter::Letter;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub(crate) struct LetterRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
}

impl From<LetterRecord> for Letter {
    fn from(record: LetterRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            title: record.title,
            content: record.content,
            created_at: record.created_at,
        }
    }
}
