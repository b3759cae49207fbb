//! Service registry - thin orchestrator for urban service records.
//!
//! Delegates persistence to the `ServiceRepository` port, reports absent rows
//! as `EntityNotFoundById` and projects DTOs into schema records.

use std::sync::Arc;

use crate::error::{EntityNotFoundById, UrbanApiError};
use crate::ports::ServiceRepository;
use crate::schemas::{
    ServiceData, ServiceDataPatch, ServiceDataPost, ServiceDataPut, ServiceDataWithGeometry,
    ServiceWithTerritories, ServicesQuery,
};

const SERVICE: &str = "service";

pub struct ServiceRegistry {
    repo: Arc<dyn ServiceRepository>,
}

impl ServiceRegistry {
    pub fn new(repo: Arc<dyn ServiceRepository>) -> Self {
        Self { repo }
    }

    /// Get a service by id.
    pub async fn get(&self, service_id: i64) -> Result<ServiceData, UrbanApiError> {
        self.repo
            .get_service_by_id(service_id)
            .await?
            .map(ServiceData::from)
            .ok_or_else(|| EntityNotFoundById::new(service_id, SERVICE).into())
    }

    /// Get a service together with the territories it belongs to.
    pub async fn get_with_territories(
        &self,
        service_id: i64,
    ) -> Result<ServiceWithTerritories, UrbanApiError> {
        self.repo
            .get_service_with_territories(service_id)
            .await?
            .map(ServiceWithTerritories::from)
            .ok_or_else(|| EntityNotFoundById::new(service_id, SERVICE).into())
    }

    /// List services located in a territory.
    pub async fn list_by_territory(
        &self,
        territory_id: i64,
        query: &ServicesQuery,
    ) -> Result<Vec<ServiceData>, UrbanApiError> {
        let services = self
            .repo
            .get_services_by_territory(territory_id, query)
            .await?;
        tracing::debug!(territory_id, count = services.len(), "listed services");
        Ok(services.into_iter().map(ServiceData::from).collect())
    }

    /// List services located in a territory, with their geometry.
    pub async fn list_with_geometry_by_territory(
        &self,
        territory_id: i64,
        query: &ServicesQuery,
    ) -> Result<Vec<ServiceDataWithGeometry>, UrbanApiError> {
        let services = self
            .repo
            .get_services_with_geometry_by_territory(territory_id, query)
            .await?;
        tracing::debug!(territory_id, count = services.len(), "listed services with geometry");
        Ok(services
            .into_iter()
            .map(ServiceDataWithGeometry::from)
            .collect())
    }

    /// Create a service.
    pub async fn add(&self, service: ServiceDataPost) -> Result<ServiceData, UrbanApiError> {
        let dto = self.repo.add_service(service).await?;
        tracing::info!(service_id = dto.service_id, "service created");
        Ok(dto.into())
    }

    /// Replace every writable field of a service.
    pub async fn put(
        &self,
        service_id: i64,
        service: ServiceDataPut,
    ) -> Result<ServiceData, UrbanApiError> {
        let dto = self
            .repo
            .put_service(service_id, service)
            .await?
            .ok_or_else(|| EntityNotFoundById::new(service_id, SERVICE))?;
        tracing::info!(service_id, "service replaced");
        Ok(dto.into())
    }

    /// Update only the fields set in the patch.
    pub async fn patch(
        &self,
        service_id: i64,
        service: ServiceDataPatch,
    ) -> Result<ServiceData, UrbanApiError> {
        let dto = self
            .repo
            .patch_service(service_id, service)
            .await?
            .ok_or_else(|| EntityNotFoundById::new(service_id, SERVICE))?;
        tracing::info!(service_id, "service patched");
        Ok(dto.into())
    }
}
