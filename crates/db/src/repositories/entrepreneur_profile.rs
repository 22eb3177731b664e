//! Entrepreneur profile repository.

use std::sync::Arc;

use crate::entities::{EntrepreneurProfile, entrepreneur_profile};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, SqlErr};
use tanzconnect_common::{AppError, AppResult};

/// Entrepreneur profile repository for database operations.
#[derive(Clone)]
pub struct EntrepreneurProfileRepository {
    db: Arc<DatabaseConnection>,
}

impl EntrepreneurProfileRepository {
    /// Create a new entrepreneur profile repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a profile by owning account ID.
    pub async fn find_by_user_id(
        &self,
        user_id: &str,
    ) -> AppResult<Option<entrepreneur_profile::Model>> {
        EntrepreneurProfile::find_by_id(user_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a profile by owning account ID, returning an error if not found.
    pub async fn get_by_user_id(&self, user_id: &str) -> AppResult<entrepreneur_profile::Model> {
        self.find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("EntrepreneurProfile: {user_id}")))
    }

    /// Create a profile. `user_id` is the primary key, so a second insert for
    /// the same account surfaces as a conflict instead of a silent duplicate.
    pub async fn create(
        &self,
        model: entrepreneur_profile::ActiveModel,
    ) -> AppResult<entrepreneur_profile::Model> {
        model.insert(self.db.as_ref()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::Conflict("Entrepreneur profile already exists".to_string())
            } else {
                AppError::Database(e.to_string())
            }
        })
    }
}
