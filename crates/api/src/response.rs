//! API response types.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Envelope for successful JSON responses.
///
/// Failures never pass through here; handlers return `AppError`, whose
/// `IntoResponse` impl renders the `error` object.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in the `data` envelope.
    pub const fn ok(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
