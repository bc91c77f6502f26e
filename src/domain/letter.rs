use time::OffsetDateTime;
use uuid::Uuid;

/// An unsent letter, owned by exactly one user.
#[derive(Debug, Clone)]
pub struct Letter {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
}

/// # Errors
/// Returns a human-readable message when the title is empty or longer than 255 characters.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.is_empty() || title.chars().count() > 255 {
        return Err("Title must be non-empty and less than 255 characters.".to_string());
    }
    Ok(())
}

/// # Errors
/// Returns a human-readable message when the content is empty.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("Content cannot be empty.".to_string());
    }
    Ok(())
}
