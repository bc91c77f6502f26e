use crate::domain::note::{self, UserNote};
use crate::error::{AppError, Result};
use crate::storage::note_repo::UserNoteRepository;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct UserNotePatch {
    pub content: Option<String>,
}

#[derive(Clone, Debug)]
pub struct UserNoteService {
    repo: UserNoteRepository,
}

impl UserNoteService {
    #[must_use]
    pub fn new(repo: UserNoteRepository) -> Self {
        Self { repo }
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<UserNote>> {
        self.repo.list_for_user(user_id).await
    }

    /// # Errors
    /// Returns `AppError::Validation` when the content is empty.
    #[tracing::instrument(skip(self, content), fields(user_id = %user_id), err(level = "warn"))]
    pub async fn create(&self, user_id: Uuid, content: &str) -> Result<UserNote> {
        note::validate_content(content).map_err(AppError::Validation)?;

        self.repo.create(user_id, content).await
    }

    /// # Errors
    /// Returns `AppError::NotFound` when the row is absent or owned by someone else.
    pub async fn get(&self, id: Uuid, user_id: Uuid) -> Result<UserNote> {
        self.repo.find_owned(id, user_id).await?.ok_or(AppError::NotFound)
    }

    /// # Errors
    /// Returns `AppError::NotFound` for foreign or absent rows,
    /// `AppError::Validation` when the new content is empty.
    #[tracing::instrument(skip(self, patch), fields(user_id = %user_id), err(level = "warn"))]
    pub async fn update(&self, id: Uuid, user_id: Uuid, patch: UserNotePatch) -> Result<UserNote> {
        let mut found = self.repo.find_owned(id, user_id).await?.ok_or(AppError::NotFound)?;

        if let Some(content) = patch.content {
            note::validate_content(&content).map_err(AppError::Validation)?;
            found.content = content;
        }

        if !self.repo.update_owned(&found).await? {
            return Err(AppError::NotFound);
        }

        Ok(found)
    }

    /// # Errors
    /// Returns `AppError::NotFound` for foreign or absent rows, also on repeat deletes.
    #[tracing::instrument(skip(self), fields(user_id = %user_id), err(level = "warn"))]
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        if !self.repo.delete_owned(id, user_id).await? {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
