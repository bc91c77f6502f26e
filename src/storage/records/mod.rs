pub mod capsule;
pub mod letter;
pub mod note;
pub mod soul_note;
pub mod user;

pub(crate) use capsule::TimeCapsuleRecord;
pub(crate) use letter::LetterRecord;
pub(crate) use note::UserNoteRecord;
pub(crate) use soul_note::SoulNoteRecord;
pub(crate) use user::UserRecord;
