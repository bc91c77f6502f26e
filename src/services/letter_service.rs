use crate::domain::letter::{self, Letter};
use crate::error::{AppError, Result};
use crate::storage::letter_repo::LetterRepository;
use uuid::Uuid;

/// Fields a PATCH may carry; absent fields are left untouched.
#[derive(Debug, Default)]
pub struct LetterPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LetterService {
    repo: LetterRepository,
}

impl LetterService {
    #[must_use]
    pub fn new(repo: LetterRepository) -> Self {
        Self { repo }
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Letter>> {
        self.repo.list_for_user(user_id).await
    }

    /// # Errors
    /// Returns `AppError::Validation` when a field rule fails; nothing is written.
    #[tracing::instrument(skip(self, title, content), fields(user_id = %user_id), err(level = "warn"))]
    pub async fn create(&self, user_id: Uuid, title: &str, content: &str) -> Result<Letter> {
        letter::validate_title(title).map_err(AppError::Validation)?;
        letter::validate_content(content).map_err(AppError::Validation)?;

        self.repo.create(user_id, title, content).await
    }

    /// # Errors
    /// Returns `AppError::NotFound` when the row is absent or owned by someone else.
    pub async fn get(&self, id: Uuid, user_id: Uuid) -> Result<Letter> {
        self.repo.find_owned(id, user_id).await?.ok_or(AppError::NotFound)
    }

    /// Applies only the fields present in the patch, re-validating each.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` for foreign or absent rows,
    /// `AppError::Validation` when a changed field fails its rule.
    #[tracing::instrument(skip(self, patch), fields(user_id = %user_id), err(level = "warn"))]
    pub async fn update(&self, id: Uuid, user_id: Uuid, patch: LetterPatch) -> Result<Letter> {
        let mut found = self.repo.find_owned(id, user_id).await?.ok_or(AppError::NotFound)?;

        if let Some(title) = patch.title {
            letter::validate_title(&title).map_err(AppError::Validation)?;
            found.title = title;
        }
        if let Some(content) = patch.content {
            letter::validate_content(&content).map_err(AppError::Validation)?;
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
