//! Input validation functions
//!
//! The hosted backend owns every real invariant. The checks here are
//! the few that are cheap to do before a round trip: credential presence,
//! analytics periods, and the `validator` derive on new waste logs.

use validator::Validate;

use crate::errors::ValidationError;
use crate::models::NewWasteLog;
use crate::types::{Credentials, SignupRequest};

/// Treat missing, null, and empty strings alike
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Check that email and password are both present
pub fn require_credentials(req: &SignupRequest) -> Result<Credentials, ValidationError> {
    let email = present(req.email.as_deref()).ok_or(ValidationError::MissingCredentials)?;
    let password = present(req.password.as_deref()).ok_or(ValidationError::MissingCredentials)?;

    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
        full_name: present(req.full_name.as_deref()).map(str::to_string),
    })
}

/// Validate an analytics period in days
pub fn validate_period(days: u32) -> Result<(), ValidationError> {
    if days == 0 {
        return Err(ValidationError::InvalidPeriod(days));
    }
    Ok(())
}

/// Validate a waste log before it is sent
///
/// Reports the first failing field.
pub fn validate_new_waste_log(log: &NewWasteLog) -> Result<(), ValidationError> {
    log.validate().map_err(|errors| {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        match fields.first() {
            Some((field, errs)) => ValidationError::Field {
                field: field.to_string(),
                message: errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string()),
            },
            None => ValidationError::Field {
                field: "waste_log".to_string(),
                message: "is invalid".to_string(),
            },
        }
    })
}
