//! Investor profile repository.

use std::sync::Arc;

use crate::entities::{InvestorProfile, investor_profile};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, SqlErr};
use tanzconnect_common::{AppError, AppResult};

/// Investor profile repository for database operations.
#[derive(Clone)]
pub struct InvestorProfileRepository {
    db: Arc<DatabaseConnection>,
}

impl InvestorProfileRepository {
    /// Create a new investor profile repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a profile by owning account ID.
    pub async fn find_by_user_id(
        &self,
        user_id: &str,
    ) -> AppResult<Option<investor_profile::Model>> {
        InvestorProfile::find_by_id(user_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a profile by owning account ID, returning an error if not found.
    pub async fn get_by_user_id(&self, user_id: &str) -> AppResult<investor_profile::Model> {
        self.find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("InvestorProfile: {user_id}")))
    }

    /// Create a profile. `user_id` is the primary key, so a second insert for
    /// the same account surfaces as a conflict instead of a silent duplicate.
    pub async fn create(
        &self,
        model: investor_profile::ActiveModel,
    ) -> AppResult<investor_profile::Model> {
        model.insert(self.db.as_ref()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::Conflict("Investor profile already exists".to_string())
            } else {
                AppError::Database(e.to_string())
            }
        })
    }
}
