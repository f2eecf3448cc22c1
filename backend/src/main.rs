//! Pantry Tracker Backend
//!
//! API-route layer for the pantry and food-waste dashboard.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: signup orchestration
//! - Hosted backend: accounts and profile rows live in the BaaS,
//!   reached through `services::baas`

use anyhow::Result;
use pantry_tracker_backend::{config, routes, state::AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Pantry Tracker Backend"
    );

    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    } else if config.baas.anon_key.is_empty() {
        warn!("baas.anon_key is empty - signups will be rejected by the hosted backend");
    }

    let state = AppState::new(config.clone())?;

    // The hosted backend being down is not fatal at startup; readiness reports it
    match state.baas().health_check().await {
        Ok(()) => info!(url = %state.baas().base_url(), "Hosted backend reachable"),
        Err(e) => warn!(url = %state.baas().base_url(), "Hosted backend not reachable: {}", e),
    }

    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "pantry_tracker_backend=info,tower_http=info".into()
        } else {
            "pantry_tracker_backend=debug,tower_http=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    let errors = config.production_errors();

    if config.baas.url.starts_with("http://") {
        warn!("Hosted backend URL is not HTTPS - ensure this is intentional for production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
