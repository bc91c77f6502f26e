pub mod auth;
pub mod letters;
pub mod soul_notes;
pub mod time_capsules;
pub mod user_notes;
pub mod wellness;
