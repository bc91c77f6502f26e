use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Signup {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
}

#[derive(Deserialize)]
pub struct Login {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}

/// Wire form of a user. The password digest deliberately has no field here.
#[derive(Serialize)]
pub struct UserBody {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self { id: user.id, username: user.username, email: user.email, created_at: user.created_at }
    }
}
