use crate::domain::letter::Letter;
use crate::services::letter_service::LetterPatch;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateLetter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateLetter {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<UpdateLetter> for LetterPatch {
    fn from(payload: UpdateLetter) -> Self {
        Self { title: payload.title, content: payload.content }
    }
}

/// Wire form of a letter; carries the owner id but never the owner record.
#[derive(Serialize)]
pub struct LetterBody {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Letter> for LetterBody {
    fn from(letter: Letter) -> Self {
        Self {
            id: letter.id,
            user_id: letter.user_id,
            title: letter.title,
            content: letter.content,
            created_at: letter.created_at,
        }
    }
}
