//! Shared test utilities for the watchdue workspace
//!
//! This crate provides mock implementations of external services for testing
//! without network dependencies. The mocks are used across the worker and
//! API test suites.
//!
//! # Mock Services
//!
//! - [`MockTitleServer`] - mock IMDB-like title metadata API for ingestion tests
//!
//! # Example
//!
//! ```rust,ignore
//! use watchdue_test_utils::{MockTitleServer, TitleFixture};
//!
//! #[tokio::test]
//! async fn test_with_mock_api() {
//!     let server = MockTitleServer::start().await;
//!     server
//!         .mock_filter("MostPopularMovies", &[TitleFixture::ranked("tt1", "Example", 1)])
//!         .await;
//!
//!     // Use server.url() and server.api_key() to configure a TitleClient
//! }
//! ```

mod titles;

pub use titles::{MockTitleServer, TitleFixture};
