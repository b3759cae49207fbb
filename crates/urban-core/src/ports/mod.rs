//! Port definitions (trait abstractions) for the persistence collaborator.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and exchange only DTOs and
//! validated request records.
//!
//! # Design Rules
//!
//! - No database driver types in any signature
//! - Lookups by id return `Ok(None)` when the row is absent; the services
//!   decide which entity kind to report as not found
//! - Ordering and filtering are passed through as query records; query
//!   planning stays in the implementation

pub mod indicator_repository;
pub mod service_repository;

use std::sync::Arc;
use thiserror::Error;

pub use indicator_repository::IndicatorRepository;
pub use service_repository::ServiceRepository;

/// Container for all repository trait objects.
///
/// Adapters receive a `Repos` from their composition root without
/// depending on concrete implementations.
#[derive(Clone)]
pub struct Repos {
    /// Service repository for service records and their geometry.
    pub services: Arc<dyn ServiceRepository>,
    /// Indicator repository for indicators, values and measurement units.
    pub indicators: Arc<dyn IndicatorRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        services: Arc<dyn ServiceRepository>,
        indicators: Arc<dyn IndicatorRepository>,
    ) -> Self {
        Self {
            services,
            indicators,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details and provides
/// a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A foreign key named in the request points at a missing row.
    #[error("Referenced {entity} with id={id} does not exist")]
    MissingReference { entity: String, id: i64 },

    /// A row with the same natural key already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(String),
}
