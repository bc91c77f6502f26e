use crate::domain::soul_note::SoulNote;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct SoulNoteBody {
    pub id: Uuid,
    pub message: String,
    pub category: Option<String>,
}

impl From<SoulNote> for SoulNoteBody {
    fn from(note: SoulNote) -> Self {
        Self { id: note.id, message: note.message, category: note.category }
    }
}
