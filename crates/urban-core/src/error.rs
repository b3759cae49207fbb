//! Domain error taxonomy.
//!
//! Every error kind owns its transport status through `status_code()`, a pure
//! function of the kind. Adapters translate these codes into their own status
//! vocabulary (see `urban-axum`'s `HttpError`) without inspecting messages.

use thiserror::Error;

use crate::contracts::http::status;
use crate::ports::RepositoryError;

/// Requested entity was not found by its identifier.
///
/// Both fields are set once at construction and only exposed through
/// read accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Entity '{entity}' with id={requested_id} is not found")]
pub struct EntityNotFoundById {
    requested_id: i64,
    entity: String,
}

impl EntityNotFoundById {
    /// Construct from requested identifier and entity (table) name.
    pub fn new(requested_id: i64, entity: impl Into<String>) -> Self {
        Self {
            requested_id,
            entity: entity.into(),
        }
    }

    pub const fn requested_id(&self) -> i64 {
        self.requested_id
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Always `404 Not Found`.
    pub const fn status_code(&self) -> u16 {
        status::NOT_FOUND
    }
}

/// Malformed or incomplete write payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }

    /// Always `422 Unprocessable Entity`.
    pub const fn status_code(&self) -> u16 {
        status::UNPROCESSABLE_ENTITY
    }
}

/// Errors surfaced by the core services.
#[derive(Debug, Error)]
pub enum UrbanApiError {
    /// Requested entity is absent in the collaborator's data.
    #[error(transparent)]
    NotFound(#[from] EntityNotFoundById),

    /// Write payload failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity with the same natural key already exists.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// Persistence collaborator failed.
    #[error("Repository error: {0}")]
    Repository(String),
}

impl UrbanApiError {
    /// Transport status for this error kind.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(e) => e.status_code(),
            Self::Validation(e) => e.status_code(),
            Self::AlreadyExists(_) => status::CONFLICT,
            Self::Repository(_) => status::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for UrbanApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::MissingReference { entity, id } => {
                Self::NotFound(EntityNotFoundById::new(id, entity))
            }
            RepositoryError::AlreadyExists(what) => Self::AlreadyExists(what),
            RepositoryError::Storage(msg) => Self::Repository(msg),
        }
    }
}
