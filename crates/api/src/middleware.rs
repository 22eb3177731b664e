//! API middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use tanzconnect_core::{
    AccountService, EntrepreneurProfileService, InvestorProfileService, RoutingService,
};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub account_service: AccountService,
    pub entrepreneur_service: EntrepreneurProfileService,
    pub investor_service: InvestorProfileService,
    pub routing_service: RoutingService,
}

/// Authentication middleware.
///
/// Resolves the bearer token to an account and stores it in request
/// extensions; handlers decide whether authentication is required.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = req.headers().get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
    {
        match state.account_service.authenticate_by_token(token).await {
            Ok(account) => {
                req.extensions_mut().insert(account);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Bearer token did not resolve to an account");
            }
        }
    }

    next.run(req).await
}
