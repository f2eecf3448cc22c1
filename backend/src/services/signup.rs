//! Signup service
//!
//! Account creation is delegated to the hosted backend. The profile row is
//! written afterwards on a best-effort basis: a failed insert is logged and
//! the signup still succeeds.

use crate::error::ApiError;
use crate::services::baas::{BaasClient, BaasError};
use pantry_tracker_shared::validation::require_credentials;
use pantry_tracker_shared::{SignupRequest, SignupResponse, UserProfileRow};
use tracing::{info, warn};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "User created successfully";

/// Signup service
pub struct SignupService;

impl SignupService {
    /// Create an account and its profile row
    pub async fn sign_up(baas: &BaasClient, req: &SignupRequest) -> Result<SignupResponse, ApiError> {
        let credentials = require_credentials(req)?;

        let data = baas.sign_up(&credentials).await.map_err(|err| match err {
            BaasError::Rejected { status, message } => {
                info!(status, %message, "Signup rejected by auth service");
                ApiError::BadRequest(message)
            }
            other => ApiError::Internal(other.into()),
        })?;

        if let Some(user) = &data.user {
            let email = user.email.clone().unwrap_or_else(|| credentials.email.clone());
            let row = UserProfileRow::with_defaults(user.id, email, credentials.full_name.clone());

            if let Err(err) = baas.insert_profile(&row).await {
                warn!(user_id = %user.id, error = %err, "Failed to create user profile");
            }

            info!(user_id = %user.id, "User signed up");
        }

        Ok(SignupResponse {
            data,
            message: SIGNUP_SUCCESS_MESSAGE.to_string(),
        })
    }
}
