//! User use-case service.
//!
//! Orchestrates repository calls; storage-agnostic. The only business
//! rule lives here: an update requires the record to exist.

use crate::core::error::UserError;
use crate::models::user::User;
use crate::repo::user_repo::UserRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, UserError> {
        self.repo.find_all().await
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, UserError> {
        self.repo.find_by_id(id).await
    }

    /// Persists a new record; the returned user carries the assigned id.
    pub async fn create_user(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<User, UserError> {
        self.repo.save(&User::new(name, email)).await
    }

    /// Overwrites name and email of an existing record.
    ///
    /// Returns `UserError::NotFound` when no record exists for `id`.
    pub async fn update_user(
        &self,
        id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<User, UserError> {
        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        user.name = name.into();
        user.email = email.into();

        self.repo.save(&user).await
    }

    /// Deletes a record, reporting the outcome as a boolean: `true` when
    /// a record was removed, `false` when none existed. Never an error.
    pub async fn delete_user(&self, id: Uuid) -> Result<bool, UserError> {
        if self.repo.exists_by_id(id).await? {
            self.repo.delete_by_id(id).await?;
            return Ok(true);
        }

        Ok(false)
    }
}
