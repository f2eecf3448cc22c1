//! Business logic services
//!
//! Services encapsulate business logic and coordinate calls to the
//! hosted backend.

pub mod baas;
pub mod signup;

pub use baas::{BaasClient, BaasError};
pub use signup::SignupService;
