//! Pantry Tracker API Client
//!
//! Typed HTTP client for the dashboard's data API and the analytics hook
//! that the dashboard pages drive.

pub mod api;
pub mod error;
pub mod hook;
pub mod http;

pub use api::AnalyticsApi;
pub use error::ClientError;
pub use hook::{AnalyticsHook, AnalyticsState};
pub use http::{ApiClient, ClientConfig};
