use uuid::Uuid;

/// A shared, ownerless affirmation. Read-only over the API, seeded out-of-band.
#[derive(Debug, Clone)]
pub struct SoulNote {
    pub id: Uuid,
    pub message: String,
    pub category: Option<String>,
}

/// # Errors
/// Returns a human-readable message when the message is empty or longer than 500 characters.
pub fn validate_message(message: &str) -> Result<(), String> {
    if message.is_empty() || message.chars().count() > 500 {
        return Err("Message must be non-empty and less than 500 characters.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_bounds() {
        assert!(validate_message("You are exactly where you need to be.").is_ok());
        assert!(validate_message(&"m".repeat(500)).is_ok());
        assert!(validate_message(&"m".repeat(501)).is_err());
        assert!(validate_message("").is_err());
    }
}
