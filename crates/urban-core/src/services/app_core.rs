//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters receive an
//! `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::{IndicatorCatalog, ServiceRegistry};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete repository
/// implementations.
///
/// # Example
///
/// ```ignore
/// let repos = Repos::new(service_repo, indicator_repo);
/// let core = AppCore::new(repos);
///
/// let service = core.services().get(1).await?;
/// ```
pub struct AppCore {
    services: ServiceRegistry,
    indicators: IndicatorCatalog,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            services: ServiceRegistry::new(repos.services),
            indicators: IndicatorCatalog::new(repos.indicators),
        }
    }

    /// Access the service registry.
    pub const fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    /// Access the indicator catalog.
    pub const fn indicators(&self) -> &IndicatorCatalog {
        &self.indicators
    }
}
