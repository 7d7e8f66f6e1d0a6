//! HTTP route handlers

pub mod audiovisuals;
pub mod auth;
pub mod books;
pub mod health;
pub mod reference;
pub mod titles;

pub use audiovisuals::audiovisuals_router;
pub use auth::{auth_router, AuthState};
pub use books::books_router;
pub use health::{health_router, HealthState};
pub use reference::{reference_router, ReferenceState};
pub use titles::titles_router;
