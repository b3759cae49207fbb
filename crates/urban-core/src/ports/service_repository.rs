//! Service repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::dto::{ServiceDto, ServiceWithGeometryDto, ServiceWithTerritoriesDto};
use crate::schemas::{ServiceDataPatch, ServiceDataPost, ServiceDataPut, ServicesQuery};

/// Repository for service persistence operations.
///
/// # Errors
///
/// - `MissingReference` when a referenced row (territory, service type,
///   physical object, object geometry) does not exist
/// - `Storage` for backend failures
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn get_service_by_id(&self, service_id: i64) -> Result<Option<ServiceDto>, RepositoryError>;

    async fn get_service_with_territories(
        &self,
        service_id: i64,
    ) -> Result<Option<ServiceWithTerritoriesDto>, RepositoryError>;

    /// Services located in a territory, filtered and ordered per `query`.
    async fn get_services_by_territory(
        &self,
        territory_id: i64,
        query: &ServicesQuery,
    ) -> Result<Vec<ServiceDto>, RepositoryError>;

    async fn get_services_with_geometry_by_territory(
        &self,
        territory_id: i64,
        query: &ServicesQuery,
    ) -> Result<Vec<ServiceWithGeometryDto>, RepositoryError>;

    /// Insert a service and link it to its physical object and geometry.
    async fn add_service(&self, service: ServiceDataPost) -> Result<ServiceDto, RepositoryError>;

    /// Replace every writable column. Returns `None` if the service is absent.
    async fn put_service(
        &self,
        service_id: i64,
        service: ServiceDataPut,
    ) -> Result<Option<ServiceDto>, RepositoryError>;

    /// Update only the fields set in `service`. Returns `None` if the service is absent.
    async fn patch_service(
        &self,
        service_id: i64,
        service: ServiceDataPatch,
    ) -> Result<Option<ServiceDto>, RepositoryError>;
}
