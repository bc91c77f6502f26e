use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}

/// Checks the username field rules applied on every signup.
///
/// # Errors
/// Returns a human-readable message when the username is empty or outside 3-80 characters.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty.".to_string());
    }
    let len = username.chars().count();
    if !(3..=80).contains(&len) {
        return Err("Username must be between 3 and 80 characters.".to_string());
    }
    Ok(())
}

/// Checks that an email has a basic `local@domain.tld` shape.
///
/// # Errors
/// Returns a human-readable message when the shape does not match.
pub fn validate_email(email: &str) -> Result<(), String> {
    let shape_ok = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain
                .rsplit_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
    });
    if !shape_ok || email.chars().any(char::is_whitespace) {
        return Err("Invalid email format.".to_string());
    }
    Ok(())
}

/// Minimum length check applied before a password ever reaches the hasher.
///
/// # Errors
/// Returns a human-readable message when the password is shorter than 6 characters.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long.".to_string());
    }
    Ok(())
}
