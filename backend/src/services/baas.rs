//! Hosted backend REST client
//!
//! HTTP client for the backend-as-a-service that owns user accounts and
//! the profile table. The endpoints follow the Supabase layout
//! (`/auth/v1/*` for GoTrue, `/rest/v1/*` for PostgREST).

use crate::config::BaasConfig;
use pantry_tracker_shared::{AuthSession, AuthUser, Credentials, SignupData, UserProfileRow};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from the hosted backend
#[derive(Debug, Error)]
pub enum BaasError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Hosted backend client
#[derive(Debug)]
pub struct BaasClient {
    client: Client,
    base_url: String,
    anon_key: SecretString,
    service_role_key: SecretString,
    profiles_table: String,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    full_name: Option<&'a str>,
}

impl BaasClient {
    /// Create a new client from configuration
    pub fn new(config: &BaasConfig) -> Result<Self, BaasError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: SecretString::new(config.anon_key.clone()),
            service_role_key: SecretString::new(config.service_role_key.clone()),
            profiles_table: config.profiles_table.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn with_key(&self, request: RequestBuilder, key: &SecretString) -> RequestBuilder {
        request
            .header("apikey", key.expose_secret())
            .bearer_auth(key.expose_secret())
    }

    /// Check that the auth service answers
    pub async fn health_check(&self) -> Result<(), BaasError> {
        let url = format!("{}/auth/v1/health", self.base_url);
        let response = self
            .with_key(self.client.get(&url), &self.anon_key)
            .send()
            .await?;
        ensure_success(response).await.map(|_| ())
    }

    /// Create an account
    ///
    /// `full_name` travels as user metadata. The returned session is `None`
    /// when the project requires email confirmation.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignupData, BaasError> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        let body = SignUpBody {
            email: &credentials.email,
            password: &credentials.password,
            data: SignUpMetadata {
                full_name: credentials.full_name.as_deref(),
            },
        };

        let response = self
            .with_key(self.client.post(&url), &self.anon_key)
            .json(&body)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| BaasError::Decode(e.to_string()))?;
        parse_signup_payload(payload)
    }

    /// Insert a profile row
    pub async fn insert_profile(&self, row: &UserProfileRow) -> Result<(), BaasError> {
        let url = format!("{}/rest/v1/{}", self.base_url, self.profiles_table);
        debug!(user_id = %row.id, table = %self.profiles_table, "Inserting profile row");

        let response = self
            .with_key(self.client.post(&url), &self.service_role_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        ensure_success(response).await.map(|_| ())
    }
}

/// Turn non-success responses into `BaasError::Rejected`
async fn ensure_success(response: Response) -> Result<Response, BaasError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            debug!(error = %e, status = status.as_u16(), "Failed to read error body");
            String::new()
        }
    };
    let message = error_message(&text).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request rejected")
            .to_string()
    });

    Err(BaasError::Rejected {
        status: status.as_u16(),
        message,
    })
}

/// Pull a human-readable message out of an error body
///
/// GoTrue uses `msg` or `error_description`, PostgREST uses `message`.
fn error_message(body: &str) -> Option<String> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            let trimmed = body.trim();
            return (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    };

    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Normalize the three shapes the signup endpoint answers with
///
/// - a session object carrying the user under `user`
/// - `{user, session}`
/// - a bare user object (email confirmation pending)
fn parse_signup_payload(payload: Value) -> Result<SignupData, BaasError> {
    let decode = |e: serde_json::Error| BaasError::Decode(e.to_string());

    if payload.get("access_token").is_some() {
        let user = optional_field::<AuthUser>(&payload, "user").map_err(decode)?;
        let session: AuthSession = serde_json::from_value(payload).map_err(decode)?;
        return Ok(SignupData {
            user,
            session: Some(session),
        });
    }

    if payload.get("user").is_some() || payload.get("session").is_some() {
        return Ok(SignupData {
            user: optional_field(&payload, "user").map_err(decode)?,
            session: optional_field(&payload, "session").map_err(decode)?,
        });
    }

    if payload.get("id").is_some() {
        let user: AuthUser = serde_json::from_value(payload).map_err(decode)?;
        return Ok(SignupData {
            user: Some(user),
            session: None,
        });
    }

    Err(BaasError::Decode("signup response has no user or session".to_string()))
}

fn optional_field<T: serde::de::DeserializeOwned>(
    payload: &Value,
    key: &str,
) -> Result<Option<T>, serde_json::Error> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone()).map(Some),
    }
}
