//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the web adapter is wired together.
//! Concrete repositories come from the caller as a [`Repos`] bundle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;
use urban_core::ports::Repos;
use urban_core::services::AppCore;

/// Environment variable naming the bind host.
pub const HOST_ENV: &str = "URBAN_API_HOST";
/// Environment variable naming the bind port.
pub const PORT_ENV: &str = "URBAN_API_PORT";
/// Environment variable with a comma-separated list of allowed CORS origins.
pub const CORS_ORIGINS_ENV: &str = "URBAN_API_CORS_ORIGINS";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?} is not a port number")]
    InvalidPort { name: &'static str, value: String },

    #[error("invalid bind address {0}")]
    InvalidAddress(String),
}

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// IP address to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default host, port and permissive CORS.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
        }
    }

    /// Read config from the process environment, after loading `.env` if
    /// one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup. Unset variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::with_defaults();

        if let Some(host) = lookup(HOST_ENV).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup(PORT_ENV) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name: PORT_ENV,
                value: port.clone(),
            })?;
        }

        if let Some(origins) = lookup(CORS_ORIGINS_ENV) {
            let origins: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
            if !origins.is_empty() {
                config.cors = CorsConfig::AllowOrigins(origins);
            }
        }

        Ok(config)
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// Assemble the adapter context from repository implementations.
pub fn bootstrap(repos: Repos) -> AxumContext {
    AxumContext {
        core: Arc::new(AppCore::new(repos)),
    }
}

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG`; falls back to `info`. Calling it twice is harmless.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .try_init();
}

/// Start the web server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig, repos: Repos) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let addr = config.bind_addr()?;
    let app = crate::routes::create_router(bootstrap(repos), &config.cors);

    let listener = TcpListener::bind(addr).await?;
    info!(target: "urban.server", %addr, cors = ?config.cors, "urban API listening");

    axum::serve(listener, app).await?;
    Ok(())
}
