//! API integration tests.
//!
//! These tests verify the HTTP surface end to end against a mock store.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;
use tanzconnect_api::{
    middleware::{AppState, auth_middleware},
    router as api_router,
};
use tanzconnect_core::{
    AccountService, EntrepreneurProfileService, InvestorProfileService, RoutingService,
};
use tanzconnect_db::{
    entities::{
        account::{self, UserType},
        entrepreneur_profile::{self, Stage, VerificationStatus, VisibilityStatus},
        investor_profile::{self, InvestorType},
    },
    repositories::{
        AccountRepository, EntrepreneurProfileRepository, InvestorProfileRepository,
    },
};
use tower::ServiceExt;

fn test_account(user_type: UserType) -> account::Model {
    account::Model {
        id: "01arz3ndektsv4rrffq69g5fav".to_string(),
        email: "user@example.com".to_string(),
        email_lower: "user@example.com".to_string(),
        user_type,
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        token: Some("test_token".to_string()),
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

fn test_entrepreneur_profile() -> entrepreneur_profile::Model {
    entrepreneur_profile::Model {
        user_id: "01arz3ndektsv4rrffq69g5fav".to_string(),
        business_name: "Mkulima Fresh".to_string(),
        industry: "Agriculture & Agribusiness".to_string(),
        stage: Stage::Startup,
        funding_needed_tzs: 50_000_000,
        location: "Dar es Salaam".to_string(),
        phone: "+255 700 000 000".to_string(),
        public_pitch: "Farm-to-market produce logistics for smallholders".to_string(),
        extended_summary: None,
        business_registered: true,
        has_revenue: true,
        months_operating: 18,
        verification_status: VerificationStatus::Pending,
        visibility_status: VisibilityStatus::Hidden,
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

fn test_investor_profile(investor_type: InvestorType) -> investor_profile::Model {
    investor_profile::Model {
        user_id: "01arz3ndektsv4rrffq69g5fav".to_string(),
        investor_name: "Kilimanjaro Capital".to_string(),
        investor_type,
        investment_range_min_tzs: 10_000_000,
        investment_range_max_tzs: 200_000_000,
        preferred_industries: serde_json::json!(["Renewable Energy"]),
        location: "Arusha".to_string(),
        phone: "+255 700 000 001".to_string(),
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

/// Build the router with all services backed by one mock connection.
///
/// Queries pop off the mock in request order: the auth lookup first when a
/// bearer token is sent, then whatever the handler queries.
fn create_test_router(db: MockDatabase) -> Router {
    let conn = Arc::new(db.into_connection());

    let account_repo = AccountRepository::new(Arc::clone(&conn));
    let entrepreneur_repo = EntrepreneurProfileRepository::new(Arc::clone(&conn));
    let investor_repo = InvestorProfileRepository::new(Arc::clone(&conn));

    let state = AppState {
        account_service: AccountService::new(account_repo),
        entrepreneur_service: EntrepreneurProfileService::new(entrepreneur_repo.clone()),
        investor_service: InvestorProfileService::new(investor_repo.clone()),
        routing_service: RoutingService::new(entrepreneur_repo, investor_repo),
    };

    api_router()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn response_error_message(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    json["error"]["message"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_unauthenticated_root_redirects_to_login() {
    let app = create_test_router(MockDatabase::new(DatabaseBackend::Postgres));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_unauthenticated_dashboard_redirects_to_login() {
    for uri in ["/entrepreneur/dashboard", "/investor/dashboard"] {
        let app = create_test_router(MockDatabase::new(DatabaseBackend::Postgres));

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }
}

#[tokio::test]
async fn test_unauthenticated_creation_form_redirects_to_login() {
    for uri in ["/entrepreneur/profile/create", "/investor/profile/create"] {
        let app = create_test_router(MockDatabase::new(DatabaseBackend::Postgres));

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }
}

#[tokio::test]
async fn test_login_form_renders_for_guests() {
    // Guard redirects land on /login with a GET, so it must serve one.
    let app = create_test_router(MockDatabase::new(DatabaseBackend::Postgres));

    let response = app
        .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["data"]["registerPath"], "/register");
}

#[tokio::test]
async fn test_register_form_lists_role_options() {
    let app = create_test_router(MockDatabase::new(DatabaseBackend::Postgres));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/register")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let roles = json["data"]["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 3);
    assert_eq!(roles[0]["value"], "entrepreneur");
    assert_eq!(json["data"]["passwordMinChars"], 6);
}

#[tokio::test]
async fn test_login_form_routes_signed_in_visitors_onward() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::Entrepreneur)]])
        .append_query_results([[test_entrepreneur_profile()]]);
    let app = create_test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/login")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/entrepreneur/dashboard"
    );
}

#[tokio::test]
async fn test_entrepreneur_without_profile_redirected_to_creation() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::Entrepreneur)]])
        .append_query_results([Vec::<entrepreneur_profile::Model>::new()]);
    let app = create_test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/entrepreneur/dashboard")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/entrepreneur/profile/create"
    );
}

#[tokio::test]
async fn test_pitch_over_280_chars_returns_exact_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::Entrepreneur)]]);
    let app = create_test_router(db);

    let body = serde_json::json!({
        "businessName": "Mkulima Fresh",
        "industry": "Agriculture & Agribusiness",
        "stage": "startup",
        "fundingNeededTzs": 50_000_000,
        "location": "Dar es Salaam",
        "phone": "+255 700 000 000",
        "publicPitch": "a".repeat(281),
        "businessRegistered": true,
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/entrepreneur/profile")
                .method("POST")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_error_message(response).await,
        "Public pitch must be 280 characters or less"
    );
}

#[tokio::test]
async fn test_unregistered_growth_stage_returns_exact_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::Entrepreneur)]]);
    let app = create_test_router(db);

    let body = serde_json::json!({
        "businessName": "Mkulima Fresh",
        "industry": "Agriculture & Agribusiness",
        "stage": "growth",
        "fundingNeededTzs": 50_000_000,
        "location": "Dar es Salaam",
        "phone": "+255 700 000 000",
        "publicPitch": "Farm-to-market produce logistics",
        "businessRegistered": false,
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/entrepreneur/profile")
                .method("POST")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_error_message(response).await,
        "Business must be registered for Startup or Growth stage"
    );
}

#[tokio::test]
async fn test_investor_range_inverted_returns_exact_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::IndividualInvestor)]]);
    let app = create_test_router(db);

    let body = serde_json::json!({
        "investorName": "Kilimanjaro Capital",
        "investorType": "individual",
        "investmentRangeMinTzs": 100_000_000,
        "investmentRangeMaxTzs": 50_000_000,
        "preferredIndustries": ["Renewable Energy"],
        "location": "Arusha",
        "phone": "+255 700 000 001",
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/investor/profile")
                .method("POST")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_error_message(response).await,
        "Maximum investment must be greater than minimum"
    );
}

#[tokio::test]
async fn test_investor_empty_industries_returns_exact_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::InstitutionalInvestor)]]);
    let app = create_test_router(db);

    let body = serde_json::json!({
        "investorName": "Kilimanjaro Capital",
        "investorType": "institutional",
        "investmentRangeMinTzs": 10_000_000,
        "investmentRangeMaxTzs": 200_000_000,
        "preferredIndustries": [],
        "location": "Arusha",
        "phone": "+255 700 000 001",
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/investor/profile")
                .method("POST")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_error_message(response).await,
        "Please select at least one preferred industry"
    );
}

#[tokio::test]
async fn test_both_investor_roles_route_to_the_same_dashboard() {
    for user_type in [UserType::IndividualInvestor, UserType::InstitutionalInvestor] {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_account(user_type)]])
            .append_query_results([[test_investor_profile(InvestorType::Individual)]]);
        let app = create_test_router(db);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::AUTHORIZATION, "Bearer test_token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/investor/dashboard");
    }
}

#[tokio::test]
async fn test_entrepreneur_with_profile_routed_to_dashboard() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::Entrepreneur)]])
        .append_query_results([[test_entrepreneur_profile()]]);
    let app = create_test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/entrepreneur/dashboard"
    );
}

#[tokio::test]
async fn test_institutional_dashboard_includes_post_project_section() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::InstitutionalInvestor)]])
        .append_query_results([[test_investor_profile(InvestorType::Institutional)]]);
    let app = create_test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/investor/dashboard")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json["data"]["postProject"].is_object());
}

#[tokio::test]
async fn test_individual_dashboard_has_no_post_project_section() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::IndividualInvestor)]])
        .append_query_results([[test_investor_profile(InvestorType::Individual)]]);
    let app = create_test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/investor/dashboard")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json["data"]["postProject"].is_null());
}

#[tokio::test]
async fn test_creation_form_lists_catalog_entries() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::Entrepreneur)]])
        .append_query_results([Vec::<entrepreneur_profile::Model>::new()]);
    let app = create_test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/entrepreneur/profile/create")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["data"]["industries"].as_array().unwrap().len(), 13);
    assert_eq!(json["data"]["stages"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_creation_form_with_existing_profile_redirects_to_dashboard() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[test_account(UserType::Entrepreneur)]])
        .append_query_results([[test_entrepreneur_profile()]]);
    let app = create_test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/entrepreneur/profile/create")
                .header(header::AUTHORIZATION, "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/entrepreneur/dashboard"
    );
}

#[tokio::test]
async fn test_login_with_unknown_email_returns_unauthorized() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<account::Model>::new()]);
    let app = create_test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/login")
                .method("POST")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"email":"nobody@example.com","password":"secret123"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_with_invalid_email_is_rejected() {
    let app = create_test_router(MockDatabase::new(DatabaseBackend::Postgres));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/register")
                .method("POST")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"email":"not-an-email","password":"secret123","userType":"entrepreneur"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_without_session_returns_unauthorized() {
    let app = create_test_router(MockDatabase::new(DatabaseBackend::Postgres));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/logout")
                .method("POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_endpoint_returns_404() {
    let app = create_test_router(MockDatabase::new(DatabaseBackend::Postgres));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nonexistent/endpoint")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
