//! HTTP API layer for tanzconnect.
//!
//! This crate provides the marketplace's HTTP surface:
//!
//! - **Endpoints**: registration, login, role routing, profile forms and dashboards
//! - **Extractors**: session-token authentication
//! - **Middleware**: bearer-token resolution, logging, CORS
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
