//! Configuration management for the Pantry Tracker backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: PT__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub baas: BaasConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

/// Hosted backend (auth + database) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaasConfig {
    /// Project URL, e.g. https://xyz.supabase.co
    pub url: String,
    /// Public key sent as `apikey` on auth calls
    pub anon_key: String,
    /// Privileged key used for profile inserts
    pub service_role_key: String,
    pub profiles_table: String,
    pub request_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 30,
            },
            baas: BaasConfig {
                url: "http://localhost:54321".to_string(),
                anon_key: String::new(),
                service_role_key: String::new(),
                profiles_table: "user_profiles".to_string(),
                request_timeout_ms: 10_000,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with PT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., PT__BAAS__URL=https://xyz.supabase.co sets baas.url
            .add_source(config::Environment::with_prefix("PT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Problems that make this configuration unusable in production
    pub fn production_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.baas.url.trim().is_empty() {
            errors.push("baas.url must be set");
        }
        if self.baas.anon_key.trim().is_empty() {
            errors.push("baas.anon_key must be set");
        }
        if self.baas.service_role_key.trim().is_empty() {
            errors.push("baas.service_role_key must be set");
        }
        errors
    }
}
