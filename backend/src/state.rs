//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::AppConfig;
use crate::services::{BaasClient, BaasError};
use std::sync::Arc;

/// Shared application state
///
/// All fields are Arc'd, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Hosted backend client with a pooled HTTP connection
    pub baas: Arc<BaasClient>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Result<Self, BaasError> {
        let baas = BaasClient::new(&config.baas)?;

        Ok(Self {
            config: Arc::new(config),
            baas: Arc::new(baas),
        })
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the hosted backend client
    #[inline]
    pub fn baas(&self) -> &BaasClient {
        &self.baas
    }
}
