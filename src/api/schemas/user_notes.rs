use crate::domain::note::UserNote;
use crate::services::note_service::UserNotePatch;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateUserNote {
    #[serde(default)]
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateUserNote {
    pub content: Option<String>,
}

impl From<UpdateUserNote> for UserNotePatch {
    fn from(payload: UpdateUserNote) -> Self {
        Self { content: payload.content }
    }
}

#[derive(Serialize)]
pub struct UserNoteBody {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<UserNote> for UserNoteBody {
    fn from(note: UserNote) -> Self {
        Self { id: note.id, user_id: note.user_id, content: note.content, created_at: note.created_at }
    }
}
