//! Investor profile creation and dashboard endpoints.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Serialize;
use tanzconnect_common::{AppError, AppResult};
use tanzconnect_core::{CreateInvestorProfileInput, Destination, catalog::TANZANIA_INDUSTRIES};
use tanzconnect_db::entities::investor_profile::InvestorType;

use crate::{
    extractors::{AuthAccount, MaybeAuthAccount},
    middleware::AppState,
    response::ApiResponse,
};

/// Context for the profile creation form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileFormContext {
    industries: &'static [&'static str],
    investment_min_tzs: i64,
    investment_max_tzs: i64,
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

    if state.investor_service.find(&account.id).await?.is_some() {
        return Ok(Redirect::to(Destination::InvestorDashboard.path()).into_response());
    }

    let context = ProfileFormContext {
        industries: &TANZANIA_INDUSTRIES,
        investment_min_tzs: 100_000,
        investment_max_tzs: 500_000_000,
    };

    Ok(ApiResponse::ok(context).into_response())
}

/// Profile creation response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileResponse {
    pub user_id: String,
    pub destination: &'static str,
}

/// Validate and insert the investor profile.
async fn create_profile(
    AuthAccount(account): AuthAccount,
    State(state): State<AppState>,
    Json(input): Json<CreateInvestorProfileInput>,
) -> AppResult<ApiResponse<CreateProfileResponse>> {
    let profile = state.investor_service.create(&account.id, input).await?;

    Ok(ApiResponse::ok(CreateProfileResponse {
        user_id: profile.user_id,
        destination: Destination::InvestorDashboard.path(),
    }))
}

/// Placeholder section shown until matching exists.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaceholderSection {
    title: &'static str,
    message: &'static str,
}

/// Project posting section, shown to institutional investors only.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostProjectSection {
    title: &'static str,
    message: &'static str,
}

/// Dashboard view for an investor.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView {
    investor_name: String,
    investor_type: InvestorType,
    investment_range_min_tzs: i64,
    investment_range_max_tzs: i64,
    preferred_industries: serde_json::Value,
    location: String,
    verified_entrepreneurs: PlaceholderSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_project: Option<PostProjectSection>,
}

/// Serve the investor dashboard.
///
/// Individual and institutional investors share this route; only the
/// post-project section differs.
async fn dashboard(
    MaybeAuthAccount(account): MaybeAuthAccount,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Some(account) = account else {
        return Ok(Redirect::to(Destination::Login.path()).into_response());
    };

    let Some(profile) = state.investor_service.find(&account.id).await? else {
        return Ok(Redirect::to(Destination::InvestorProfileCreate.path()).into_response());
    };

    let post_project = (profile.investor_type == InvestorType::Institutional).then_some(
        PostProjectSection {
            title: "Post a Project",
            message: "As an institutional investor, you can post projects to attract entrepreneurs.",
        },
    );

    let view = DashboardView {
        investor_name: profile.investor_name,
        investor_type: profile.investor_type,
        investment_range_min_tzs: profile.investment_range_min_tzs,
        investment_range_max_tzs: profile.investment_range_max_tzs,
        preferred_industries: profile.preferred_industries,
        location: profile.location,
        verified_entrepreneurs: PlaceholderSection {
            title: "Verified Entrepreneurs",
            message: "No verified entrepreneurs available yet. Check back soon!",
        },
        post_project,
    };

    Ok(ApiResponse::ok(view).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile/create", get(profile_create_form))
        .route("/profile", post(create_profile))
        .route("/dashboard", get(dashboard))
}
