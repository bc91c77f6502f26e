use time::OffsetDateTime;
use uuid::Uuid;

/// A free-form personal note, owned by exactly one user.
#[derive(Debug, Clone)]
pub struct UserNote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: OffsetDateTime,
}

/// # Errors
/// Returns a human-readable message when the content is empty.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("Note content cannot be empty.".to_string());
    }
    Ok(())
}
