pub mod capsule;
pub mod letter;
pub mod note;
pub mod soul_note;
pub mod user;
