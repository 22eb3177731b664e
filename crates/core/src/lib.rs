//! Core business logic for tanzconnect.

pub mod catalog;
pub mod services;

pub use services::*;
