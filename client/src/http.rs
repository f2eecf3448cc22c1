//! HTTP implementation of the analytics API

use async_trait::async_trait;
use pantry_tracker_shared::validation::{validate_new_waste_log, validate_period};
use pantry_tracker_shared::{
    AnalyticsMetrics, CategoryInsight, ErrorResponse, NewWasteLog, WasteLog, WasteLogFilters,
    WasteReduction,
};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::api::AnalyticsApi;
use crate::error::ClientError;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the data API, without trailing slash
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// Data API client
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: Option<SecretString>,
}

impl ApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: None,
        })
    }

    /// Attach the session's access token to every request
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::new(token.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        debug!(path, "GET");
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        read_json(request.send().await?).await
    }
}

/// Decode a success body or turn the error body into `ClientError::Api`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()));
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            debug!(error = %e, status = status.as_u16(), "Failed to read error body");
            String::new()
        }
    };
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            if text.trim().is_empty() {
                format!("Request failed with status {}", status.as_u16())
            } else {
                text
            }
        });

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl AnalyticsApi for ApiClient {
    async fn get_analytics(&self, period_days: u32) -> Result<AnalyticsMetrics, ClientError> {
        validate_period(period_days)?;
        self.get_json("/analytics", &[("period", period_days.to_string())])
            .await
    }

    async fn get_waste_logs(&self, filters: &WasteLogFilters) -> Result<Vec<WasteLog>, ClientError> {
        self.get_json("/waste-logs", &filters.to_query()).await
    }

    async fn create_waste_log(&self, log: &NewWasteLog) -> Result<WasteLog, ClientError> {
        validate_new_waste_log(log)?;
        debug!(item = %log.item_name, "POST /waste-logs");

        let request = self.authorize(self.client.post(self.url("/waste-logs")).json(log));
        read_json(request.send().await?).await
    }

    async fn get_waste_reduction(&self, days: u32) -> Result<WasteReduction, ClientError> {
        validate_period(days)?;
        self.get_json("/analytics/waste-reduction", &[("days", days.to_string())])
            .await
    }

    async fn get_category_insights(&self) -> Result<Vec<CategoryInsight>, ClientError> {
        self.get_json("/analytics/category-insights", &[]).await
    }
}
