//! Service layer for the watchdue API

pub mod auth;

pub use auth::{AuthConfig, AuthService};
