//! Entrepreneur profile service.

use sea_orm::Set;
use serde::Deserialize;
use tanzconnect_common::{AppError, AppResult};
use tanzconnect_db::{
    entities::entrepreneur_profile::{self, Stage, VerificationStatus, VisibilityStatus},
    repositories::EntrepreneurProfileRepository,
};
use validator::Validate;

/// Maximum length of the public pitch shown to all investors.
const MAX_PITCH_CHARS: usize = 280;

/// Entrepreneur profile business logic.
#[derive(Clone)]
pub struct EntrepreneurProfileService {
    profile_repo: EntrepreneurProfileRepository,
}

/// Input for creating an entrepreneur profile.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntrepreneurProfileInput {
    #[validate(length(min = 1, max = 256))]
    pub business_name: String,

    #[validate(length(min = 1, max = 128))]
    pub industry: String,

    pub stage: Stage,

    /// Requested funding in actual TZS (one field, one unit)
    #[validate(range(min = 100_000, max = 500_000_000))]
    pub funding_needed_tzs: i64,

    #[validate(length(min = 1, max = 256))]
    pub location: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    pub public_pitch: String,

    pub extended_summary: Option<String>,

    pub business_registered: bool,

    #[serde(default)]
    pub has_revenue: bool,

    #[serde(default)]
    #[validate(range(min = 0, max = 600))]
    pub months_operating: i32,
}

impl EntrepreneurProfileService {
    /// Create a new entrepreneur profile service.
    #[must_use]
    pub const fn new(profile_repo: EntrepreneurProfileRepository) -> Self {
        Self { profile_repo }
    }

    /// Find the profile owned by an account.
    pub async fn find(&self, user_id: &str) -> AppResult<Option<entrepreneur_profile::Model>> {
        self.profile_repo.find_by_user_id(user_id).await
    }

    /// Validate a submission and insert the profile.
    ///
    /// Checks run in order and short-circuit on the first failure, before any
    /// store write. New profiles always start pending and hidden.
    pub async fn create(
        &self,
        user_id: &str,
        input: CreateEntrepreneurProfileInput,
    ) -> AppResult<entrepreneur_profile::Model> {
        if input.public_pitch.chars().count() > MAX_PITCH_CHARS {
            return Err(AppError::Validation(
                "Public pitch must be 280 characters or less".to_string(),
            ));
        }

        if input.stage != Stage::Idea && !input.business_registered {
            return Err(AppError::Validation(
                "Business must be registered for Startup or Growth stage".to_string(),
            ));
        }

        input.validate()?;

        let extended_summary = input.extended_summary.filter(|s| !s.is_empty());

        let model = entrepreneur_profile::ActiveModel {
            user_id: Set(user_id.to_string()),
            business_name: Set(input.business_name),
            industry: Set(input.industry),
            stage: Set(input.stage),
            funding_needed_tzs: Set(input.funding_needed_tzs),
            location: Set(input.location),
            phone: Set(input.phone),
            public_pitch: Set(input.public_pitch),
            extended_summary: Set(extended_summary),
            business_registered: Set(input.business_registered),
            has_revenue: Set(input.has_revenue),
            months_operating: Set(input.months_operating),
            verification_status: Set(VerificationStatus::Pending),
            visibility_status: Set(VisibilityStatus::Hidden),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let profile = self.profile_repo.create(model).await?;

        tracing::info!(
            user_id = user_id,
            industry = %profile.industry,
            stage = ?profile.stage,
            "Entrepreneur profile created"
        );

        Ok(profile)
    }
}
