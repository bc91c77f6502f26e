use crate::domain::soul_note::SoulNote;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub(crate) struct SoulNoteRecord {
    pub id: Uuid,
    pub message: String,
    pub category: Option<String>,
}

impl From<SoulNoteRecord> for SoulNote {
    fn from(record: SoulNoteRecord) -> Self {
        Self { id: record.id, message: record.message, category: record.category }
    }
}
