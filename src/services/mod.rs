pub mod account_service;
pub mod auth_service;
pub mod capsule_service;
pub mod letter_service;
pub mod note_service;
pub mod soul_note_service;
