//! Root route: redirect each visitor to their landing destination.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use tanzconnect_common::AppError;

use crate::{extractors::MaybeAuthAccount, middleware::AppState};

/// Resolve the visitor's destination and redirect there.
async fn root(
    MaybeAuthAccount(account): MaybeAuthAccount,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let destination = state.routing_service.destination(account.as_ref()).await?;

    Ok(Redirect::to(destination.path()).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
