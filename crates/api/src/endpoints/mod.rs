//! API endpoints.

mod auth;
mod entrepreneur;
mod investor;
mod routing;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(routing::router())
        .merge(auth::router())
        .nest("/entrepreneur", entrepreneur::router())
        .nest("/investor", investor::router())
}
