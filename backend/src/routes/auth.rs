//! Authentication routes
//!
//! Account creation only. Sign-in happens directly between the browser and
//! the hosted auth service.

use crate::error::{ApiError, ApiResult};
use crate::services::SignupService;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use pantry_tracker_shared::{SignupRequest, SignupResponse};
use tracing::debug;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/signup", post(signup))
}

/// Create an account and its profile row
///
/// POST /api/auth/signup
///
/// Returns 400 when credentials are missing or the auth service rejects
/// them, 500 on anything unexpected.
async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<Json<SignupResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected signup body");
        ApiError::BadRequest("Invalid request body".to_string())
    })?;

    let response = SignupService::sign_up(state.baas(), &req).await?;
    Ok(Json(response))
}
