use crate::domain::note::UserNote;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub(crate) struct UserNoteRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: OffsetDateTime,
}

impl From<UserNoteRecord> for UserNote {
    fn from(record: UserNoteRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            content: record.content,
            created_at: record.created_at,
        }
    }
}
