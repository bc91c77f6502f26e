use crate::domain::capsule::{self, TimeCapsule};
use crate::error::{AppError, Result};
use crate::storage::capsule_repo::TimeCapsuleRepository;
use time::OffsetDateTime;
use uuid::Uuid;

/// Fields a PATCH may carry; `open_date` arrives unparsed off the wire.
#[derive(Debug, Default)]
pub struct TimeCapsulePatch {
    pub message: Option<String>,
    pub open_date: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TimeCapsuleService {
    repo: TimeCapsuleRepository,
}

impl TimeCapsuleService {
    #[must_use]
    pub fn new(repo: TimeCapsuleRepository) -> Self {
        Self { repo }
    }

    /// # Errors
    /// Returns `AppError::Database` on connection failure.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<TimeCapsule>> {
        self.repo.list_for_user(user_id).await
    }

    /// The future-date rule is enforced against the clock here at write time
    /// only; reads never gate on `open_date`.
    ///
    /// # Errors
    /// Returns `AppError::Validation` when the message is empty, the date does
    /// not parse, or the date is not in the future.
    #[tracing::instrument(skip(self, message, open_date), fields(user_id = %user_id), err(level = "warn"))]
    pub async fn create(&self, user_id: Uuid, message: &str, open_date: &str) -> Result<TimeCapsule> {
        capsule::validate_message(message).map_err(AppError::Validation)?;
        let open_date = capsule::parse_open_date(open_date).map_err(AppError::Validation)?;
        capsule::validate_open_date(open_date, OffsetDateTime::now_utc()).map_err(AppError::Validation)?;

        self.repo.create(user_id, message, open_date).await
    }

    /// # Errors
    /// Returns `AppError::NotFound` when the row is absent or owned by someone else.
    pub async fn get(&self, id: Uuid, user_id: Uuid) -> Result<TimeCapsule> {
        self.repo.find_owned(id, user_id).await?.ok_or(AppError::NotFound)
    }

    /// # Errors
    /// Returns `AppError::NotFound` for foreign or absent rows,
    /// `AppError::Validation` when a changed field fails its rule.
    #[tracing::instrument(skip(self, patch), fields(user_id = %user_id), err(level = "warn"))]
    pub async fn update(&self, id: Uuid, user_id: Uuid, patch: TimeCapsulePatch) -> Result<TimeCapsule> {
        let mut found = self.repo.find_owned(id, user_id).await?.ok_or(AppError::NotFound)?;

        if let Some(message) = patch.message {
            capsule::validate_message(&message).map_err(AppError::Validation)?;
            found.message = message;
        }
        if let Some(raw) = patch.open_date {
            let open_date = capsule::parse_open_date(&raw).map_err(AppError::Validation)?;
            capsule::validate_open_date(open_date, OffsetDateTime::now_utc()).map_err(AppError::Validation)?;
            found.open_date = open_date;
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
