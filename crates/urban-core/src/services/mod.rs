//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and the schema
//! layer. They never know about concrete storage implementations.

mod app_core;
mod indicator_catalog;
mod service_registry;

pub use app_core::AppCore;
pub use indicator_catalog::IndicatorCatalog;
pub use service_registry::ServiceRegistry;
