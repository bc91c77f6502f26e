use crate::domain::soul_note::SoulNote;
use crate::error::Result;
use crate::storage::soul_note_repo::SoulNoteRepository;

#[derive(Clone, Debug)]
pub struct SoulNoteService {
    repo: SoulNoteRepository,
}

impl SoulNoteService {
    #[must_use]
    pub fn new(repo: SoulNoteRepository) -> Self {
        Self { repo }
    }

    /// An empty pool is a normal outcome, not an error; the handler turns it
    /// into a distinguishable no-content response.
    ///
    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn random(&self) -> Result<Option<SoulNote>> {
        self.repo.random().await
    }
}
