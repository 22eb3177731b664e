//! Authentication endpoints.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tanzconnect_common::{AppError, AppResult};
use tanzconnect_core::{Destination, LoginInput, RegisterInput};
use tanzconnect_db::entities::account::UserType;
use validator::Validate;

use crate::{
    extractors::{AuthAccount, MaybeAuthAccount},
    middleware::AppState,
    response::ApiResponse,
};

/// Role option rendered on the registration form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleOption {
    value: UserType,
    label: &'static str,
    description: &'static str,
}

/// Context for the registration form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterFormContext {
    roles: [RoleOption; 3],
    password_min_chars: usize,
    login_path: &'static str,
}

/// Serve the registration form context.
///
/// Signed-in visitors are routed onward instead of seeing the form again.
async fn register_form(
    MaybeAuthAccount(account): MaybeAuthAccount,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if let Some(account) = account {
        let destination = state.routing_service.destination(Some(&account)).await?;
        return Ok(Redirect::to(destination.path()).into_response());
    }

    let context = RegisterFormContext {
        roles: [
            RoleOption {
                value: UserType::Entrepreneur,
                label: "Entrepreneur",
                description: "Seeking funding for my business",
            },
            RoleOption {
                value: UserType::IndividualInvestor,
                label: "Individual Investor",
                description: "Looking to invest in businesses",
            },
            RoleOption {
                value: UserType::InstitutionalInvestor,
                label: "Institutional Investor",
                description: "Bank, fund, or development organization",
            },
        ],
        password_min_chars: 6,
        login_path: Destination::Login.path(),
    };

    Ok(ApiResponse::ok(context).into_response())
}

/// Registration request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    pub user_type: UserType,
}

/// Registration response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: String,
    pub user_type: UserType,
    pub token: String,
    pub destination: &'static str,
}

/// Create a new account with the chosen marketplace role.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<ApiResponse<RegisterResponse>> {
    req.validate()?;

    let input = RegisterInput {
        email: req.email,
        password: req.password,
        user_type: req.user_type,
    };

    let account = state.account_service.register(input).await?;
    let destination = state.routing_service.destination(Some(&account)).await?;

    Ok(ApiResponse::ok(RegisterResponse {
        id: account.id.clone(),
        user_type: account.user_type,
        token: account.token.unwrap_or_default(),
        destination: destination.path(),
    }))
}

/// Context for the login form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginFormContext {
    title: &'static str,
    register_path: &'static str,
}

/// Serve the login form context, the landing surface for guard redirects.
///
/// Signed-in visitors are routed onward instead.
async fn login_form(
    MaybeAuthAccount(account): MaybeAuthAccount,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if let Some(account) = account {
        let destination = state.routing_service.destination(Some(&account)).await?;
        return Ok(Redirect::to(destination.path()).into_response());
    }

    let context = LoginFormContext {
        title: "Welcome Back",
        register_path: "/register",
    };

    Ok(ApiResponse::ok(context).into_response())
}

/// Login request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: String,
    pub user_type: UserType,
    pub token: String,
    pub destination: &'static str,
}

/// Sign in to an existing account.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let account = state
        .account_service
        .authenticate(&LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let destination = state.routing_service.destination(Some(&account)).await?;

    Ok(ApiResponse::ok(LoginResponse {
        id: account.id.clone(),
        user_type: account.user_type,
        token: account.token.unwrap_or_default(),
        destination: destination.path(),
    }))
}

/// Logout response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub ok: bool,
    pub destination: &'static str,
}

/// Sign out by rotating the session token, invalidating the current one.
async fn logout(
    AuthAccount(account): AuthAccount,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<LogoutResponse>> {
    state.account_service.regenerate_token(&account.id).await?;

    Ok(ApiResponse::ok(LogoutResponse {
        ok: true,
        destination: Destination::Login.path(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", post(logout))
}
