//! Investor profile service.

use sea_orm::Set;
use serde::Deserialize;
use tanzconnect_common::{AppError, AppResult};
use tanzconnect_db::{
    entities::investor_profile::{self, InvestorType},
    repositories::InvestorProfileRepository,
};
use validator::Validate;

/// Investor profile business logic.
#[derive(Clone)]
pub struct InvestorProfileService {
    profile_repo: InvestorProfileRepository,
}

/// Input for creating an investor profile.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestorProfileInput {
    #[validate(length(min = 1, max = 256))]
    pub investor_name: String,

    pub investor_type: InvestorType,

    #[validate(range(min = 100_000, max = 500_000_000))]
    pub investment_range_min_tzs: i64,

    #[validate(range(min = 100_000, max = 500_000_000))]
    pub investment_range_max_tzs: i64,

    pub preferred_industries: Vec<String>,

    #[validate(length(min = 1, max = 256))]
    pub location: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,
}

impl InvestorProfileService {
    /// Create a new investor profile service.
    #[must_use]
    pub const fn new(profile_repo: InvestorProfileRepository) -> Self {
        Self { profile_repo }
    }

    /// Find the profile owned by an account.
    pub async fn find(&self, user_id: &str) -> AppResult<Option<investor_profile::Model>> {
        self.profile_repo.find_by_user_id(user_id).await
    }

    /// Validate a submission and insert the profile.
    ///
    /// Checks run in order and short-circuit on the first failure, before any
    /// store write.
    pub async fn create(
        &self,
        user_id: &str,
        input: CreateInvestorProfileInput,
    ) -> AppResult<investor_profile::Model> {
        if input.investment_range_max_tzs <= input.investment_range_min_tzs {
            return Err(AppError::Validation(
                "Maximum investment must be greater than minimum".to_string(),
            ));
        }

        if input.preferred_industries.is_empty() {
            return Err(AppError::Validation(
                "Please select at least one preferred industry".to_string(),
            ));
        }

        input.validate()?;

        let model = investor_profile::ActiveModel {
            user_id: Set(user_id.to_string()),
            investor_name: Set(input.investor_name),
            investor_type: Set(input.investor_type),
            investment_range_min_tzs: Set(input.investment_range_min_tzs),
            investment_range_max_tzs: Set(input.investment_range_max_tzs),
            preferred_industries: Set(serde_json::json!(input.preferred_industries)),
            location: Set(input.location),
            phone: Set(input.phone),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let profile = self.profile_repo.create(model).await?;

        tracing::info!(
            user_id = user_id,
            investor_type = ?profile.investor_type,
            "Investor profile created"
        );

        Ok(profile)
    }
}
