#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by the integration tests under tests/
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use chrono as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, ConfigError, CorsConfig, ServerConfig, bootstrap, init_tracing, start_server,
};
pub use error::HttpError;
pub use extract::{ApiPath, ApiQuery, PatchJson, ValidatedJson};
pub use routes::create_router;
pub use state::AppState;
