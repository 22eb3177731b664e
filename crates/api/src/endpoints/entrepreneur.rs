//! Entrepreneur profile creation and dashboard endpoints.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Serialize;
use tanzconnect_common::{AppError, AppResult};
use tanzconnect_core::{
    CreateEntrepreneurProfileInput, Destination,
    catalog::{BUSINESS_STAGES, TANZANIA_INDUSTRIES},
};
use tanzconnect_db::entities::entrepreneur_profile::{Stage, VerificationStatus, VisibilityStatus};

use crate::{
    extractors::{AuthAccount, MaybeAuthAccount},
    middleware::AppState,
    response::ApiResponse,
};

/// Stage option rendered on the creation form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StageOption {
    value: &'static str,
    label: &'static str,
}

/// Context for the profile creation form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileFormContext {
    industries: &'static [&'static str],
    stages: Vec<StageOption>,
    funding_min_tzs: i64,
    funding_max_tzs: i64,
    pitch_max_chars: usize,
}

/// Serve the profile creation form context.
///
/// Unauthenticated visitors go to login; accounts that already have a
/// profile go straight to the dashboard.
async fn profile_create_form(
    MaybeAuthAccount(account): MaybeAuthAccount,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Some(account) = account else {
        return Ok(Redirect::to(Destination::Login.path()).into_response());
    };

    if state.entrepreneur_service.find(&account.id).await?.is_some() {
        return Ok(Redirect::to(Destination::EntrepreneurDashboard.path()).into_response());
    }

    let context = ProfileFormContext {
        industries: &TANZANIA_INDUSTRIES,
        stages: BUSINESS_STAGES
            .iter()
            .map(|&(value, label)| StageOption { value, label })
            .collect(),
        funding_min_tzs: 100_000,
        funding_max_tzs: 500_000_000,
        pitch_max_chars: 280,
    };

    Ok(ApiResponse::ok(context).into_response())
}

/// Profile creation response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileResponse {
    pub user_id: String,
    pub verification_status: VerificationStatus,
    pub visibility_status: VisibilityStatus,
    pub destination: &'static str,
}

/// Validate and insert the entrepreneur profile.
async fn create_profile(
    AuthAccount(account): AuthAccount,
    State(state): State<AppState>,
    Json(input): Json<CreateEntrepreneurProfileInput>,
) -> AppResult<ApiResponse<CreateProfileResponse>> {
    let profile = state
        .entrepreneur_service
        .create(&account.id, input)
        .await?;

    Ok(ApiResponse::ok(CreateProfileResponse {
        user_id: profile.user_id,
        verification_status: profile.verification_status,
        visibility_status: profile.visibility_status,
        destination: Destination::EntrepreneurDashboard.path(),
    }))
}

/// Placeholder section shown until featured projects exist.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeaturedProjectsSection {
    title: &'static str,
    message: &'static str,
}

/// Dashboard view for an entrepreneur.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView {
    business_name: String,
    industry: String,
    stage: Stage,
    funding_needed_tzs: i64,
    location: String,
    business_registered: bool,
    public_pitch: String,
    verification_status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_banner: Option<&'static str>,
    visibility_status: VisibilityStatus,
    featured_projects: FeaturedProjectsSection,
}

/// Serve the entrepreneur dashboard.
async fn dashboard(
    MaybeAuthAccount(account): MaybeAuthAccount,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Some(account) = account else {
        return Ok(Redirect::to(Destination::Login.path()).into_response());
    };

    let Some(profile) = state.entrepreneur_service.find(&account.id).await? else {
        return Ok(Redirect::to(Destination::EntrepreneurProfileCreate.path()).into_response());
    };

    let status_banner = match profile.verification_status {
        VerificationStatus::Pending => {
            Some("Your profile is being reviewed. You'll be notified within 2-3 business days.")
        }
        VerificationStatus::Verified => {
            Some("✓ Your profile is verified and visible to investors!")
        }
        VerificationStatus::Rejected => None,
    };

    let view = DashboardView {
        business_name: profile.business_name,
        industry: profile.industry,
        stage: profile.stage,
        funding_needed_tzs: profile.funding_needed_tzs,
        location: profile.location,
        business_registered: profile.business_registered,
        public_pitch: profile.public_pitch,
        verification_status: profile.verification_status,
        status_banner,
        visibility_status: profile.visibility_status,
        featured_projects: FeaturedProjectsSection {
            title: "Featured Institutional Projects",
            message: "No featured projects available yet. Check back soon!",
        },
    };

    Ok(ApiResponse::ok(view).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile/create", get(profile_create_form))
        .route("/profile", post(create_profile))
        .route("/dashboard", get(dashboard))
}
