//! Error types for the Pantry Tracker application

use thiserror::Error;

/// Local validation failures
///
/// Only presence and range checks live here. Everything else is
/// enforced by the hosted backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Analytics period must be a positive number of days, got {0}")]
    InvalidPeriod(u32),

    #[error("Invalid {field}: {message}")]
    Field { field: String, message: String },
}

/// Error raised when parsing a theme name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct ParseThemeError(pub String);
