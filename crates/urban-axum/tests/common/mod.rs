//! Shared fixtures for router tests: in-memory repositories and request
//! helpers.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use urban_axum::{CorsConfig, bootstrap, create_router};
use urban_core::dto::{
    IndicatorDto, IndicatorValueDto, MeasurementUnitDto, PropertyMap, ServiceDto,
    ServiceWithGeometryDto, ServiceWithTerritoriesDto, ShortTerritoryDto,
};
use urban_core::geometry::NativeGeometry;
use urban_core::ports::{IndicatorRepository, Repos, RepositoryError, ServiceRepository};
use urban_core::schemas::{
    IndicatorPatch, IndicatorPost, IndicatorValue, IndicatorValuesQuery, MeasurementUnitPost,
    Ordering, ServiceDataPatch, ServiceDataPost, ServiceDataPut, ServicesOrderByField,
    ServicesQuery,
};

/// Territory every seeded service belongs to.
pub const KNOWN_TERRITORY: i64 = 1;

fn territory_name(territory_id: i64) -> String {
    format!("Territory {territory_id}")
}

pub fn service_dto(service_id: i64) -> ServiceDto {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        + chrono::Duration::days(service_id);
    ServiceDto {
        service_id,
        service_type_id: 1,
        urban_function_id: 1,
        service_type_name: "Школа".to_string(),
        service_type_capacity_modeled: Some(500),
        service_type_code: "1".to_string(),
        territory_type_id: Some(1),
        territory_type_name: Some("Город".to_string()),
        name: Some(format!("Школа №{service_id}")),
        capacity_real: Some(300),
        properties: PropertyMap::new(),
        created_at: created,
        updated_at: created,
    }
}

#[derive(Default)]
pub struct InMemoryServices {
    services: Mutex<BTreeMap<i64, ServiceDto>>,
}

impl InMemoryServices {
    pub fn seeded(ids: &[i64]) -> Self {
        Self {
            services: Mutex::new(ids.iter().map(|&id| (id, service_dto(id))).collect()),
        }
    }

    fn check_territory(territory_id: i64) -> Result<(), RepositoryError> {
        if territory_id == KNOWN_TERRITORY {
            Ok(())
        } else {
            Err(RepositoryError::MissingReference {
                entity: "territory".to_string(),
                id: territory_id,
            })
        }
    }

    fn listed(&self, query: &ServicesQuery) -> Vec<ServiceDto> {
        let mut services: Vec<ServiceDto> = self
            .services
            .lock()
            .unwrap()
            .values()
            .filter(|s| query.service_type_id.is_none_or(|t| s.service_type_id == t))
            .cloned()
            .collect();
        if let Some(field) = query.order_by {
            services.sort_by_key(|s| match field {
                ServicesOrderByField::CreatedAt => s.created_at,
                ServicesOrderByField::UpdatedAt => s.updated_at,
            });
            if query.ordering == Ordering::Desc {
                services.reverse();
            }
        }
        services
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServices {
    async fn get_service_by_id(
        &self,
        service_id: i64,
    ) -> Result<Option<ServiceDto>, RepositoryError> {
        Ok(self.services.lock().unwrap().get(&service_id).cloned())
    }

    async fn get_service_with_territories(
        &self,
        service_id: i64,
    ) -> Result<Option<ServiceWithTerritoriesDto>, RepositoryError> {
        Ok(self
            .services
            .lock()
            .unwrap()
            .get(&service_id)
            .cloned()
            .map(|service| ServiceWithTerritoriesDto {
                service,
                territories: vec![ShortTerritoryDto {
                    territory_id: KNOWN_TERRITORY,
                    name: territory_name(KNOWN_TERRITORY),
                }],
            }))
    }

    async fn get_services_by_territory(
        &self,
        territory_id: i64,
        query: &ServicesQuery,
    ) -> Result<Vec<ServiceDto>, RepositoryError> {
        Self::check_territory(territory_id)?;
        Ok(self.listed(query))
    }

    async fn get_services_with_geometry_by_territory(
        &self,
        territory_id: i64,
        query: &ServicesQuery,
    ) -> Result<Vec<ServiceWithGeometryDto>, RepositoryError> {
        Self::check_territory(territory_id)?;
        Ok(self
            .listed(query)
            .into_iter()
            .map(|service| ServiceWithGeometryDto {
                service,
                geometry: NativeGeometry::Polygon(vec![vec![
                    [30.0, 59.0],
                    [30.0, 60.0],
                    [31.0, 60.0],
                    [30.0, 59.0],
                ]]),
                centre_point: NativeGeometry::Point([30.33, 59.66]),
            })
            .collect())
    }

    async fn add_service(&self, service: ServiceDataPost) -> Result<ServiceDto, RepositoryError> {
        let mut services = self.services.lock().unwrap();
        let service_id = services.keys().max().copied().unwrap_or(0) + 1;
        let dto = ServiceDto {
            service_type_id: service.service_type_id,
            territory_type_id: service.territory_type_id,
            territory_type_name: service.territory_type_id.map(|_| "Город".to_string()),
            name: service.name,
            capacity_real: service.capacity_real,
            properties: service.properties,
            ..service_dto(service_id)
        };
        services.insert(service_id, dto.clone());
        Ok(dto)
    }

    async fn put_service(
        &self,
        service_id: i64,
        service: ServiceDataPut,
    ) -> Result<Option<ServiceDto>, RepositoryError> {
        let mut services = self.services.lock().unwrap();
        Ok(services.get_mut(&service_id).map(|dto| {
            dto.service_type_id = service.service_type_id;
            dto.territory_type_id = service.territory_type_id;
            dto.territory_type_name = service.territory_type_id.map(|_| "Город".to_string());
            dto.name = service.name;
            dto.capacity_real = service.capacity_real;
            dto.properties = service.properties;
            dto.clone()
        }))
    }

    async fn patch_service(
        &self,
        service_id: i64,
        service: ServiceDataPatch,
    ) -> Result<Option<ServiceDto>, RepositoryError> {
        let mut services = self.services.lock().unwrap();
        Ok(services.get_mut(&service_id).map(|dto| {
            if let Some(service_type_id) = service.service_type_id {
                dto.service_type_id = service_type_id;
            }
            if let Some(name) = service.name {
                dto.name = Some(name);
            }
            if let Some(capacity) = service.capacity_real {
                dto.capacity_real = Some(capacity);
            }
            if let Some(properties) = service.properties {
                dto.properties = properties;
            }
            dto.clone()
        }))
    }
}

#[derive(Default)]
pub struct InMemoryIndicators {
    indicators: Mutex<Vec<IndicatorDto>>,
    values: Mutex<Vec<IndicatorValueDto>>,
    units: Mutex<Vec<MeasurementUnitDto>>,
}

#[async_trait]
impl IndicatorRepository for InMemoryIndicators {
    async fn get_measurement_units(&self) -> Result<Vec<MeasurementUnitDto>, RepositoryError> {
        Ok(self.units.lock().unwrap().clone())
    }

    async fn add_measurement_unit(
        &self,
        unit: MeasurementUnitPost,
    ) -> Result<MeasurementUnitDto, RepositoryError> {
        let mut units = self.units.lock().unwrap();
        if units.iter().any(|u| u.name == unit.name) {
            return Err(RepositoryError::AlreadyExists(format!(
                "measurement unit '{}'",
                unit.name
            )));
        }
        let dto = MeasurementUnitDto {
            measurement_unit_id: i64::try_from(units.len()).unwrap() + 1,
            name: unit.name,
        };
        units.push(dto.clone());
        Ok(dto)
    }

    async fn get_indicators_by_parent(
        &self,
        parent_id: Option<i64>,
    ) -> Result<Vec<IndicatorDto>, RepositoryError> {
        Ok(self
            .indicators
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.parent_id == parent_id)
            .cloned()
            .collect())
    }

    async fn get_indicator_by_id(
        &self,
        indicator_id: i64,
    ) -> Result<Option<IndicatorDto>, RepositoryError> {
        Ok(self
            .indicators
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.indicator_id == indicator_id)
            .cloned())
    }

    async fn add_indicator(&self, indicator: IndicatorPost) -> Result<IndicatorDto, RepositoryError> {
        let mut indicators = self.indicators.lock().unwrap();
        let dto = IndicatorDto {
            indicator_id: i64::try_from(indicators.len()).unwrap() + 1,
            name_full: indicator.name_full,
            name_short: indicator.name_short,
            measurement_unit_id: indicator.measurement_unit_id,
            level: indicator.level,
            list_label: indicator.list_label,
            parent_id: indicator.parent_id,
        };
        indicators.push(dto.clone());
        Ok(dto)
    }

    async fn patch_indicator(
        &self,
        indicator_id: i64,
        indicator: IndicatorPatch,
    ) -> Result<Option<IndicatorDto>, RepositoryError> {
        let mut indicators = self.indicators.lock().unwrap();
        Ok(indicators
            .iter_mut()
            .find(|i| i.indicator_id == indicator_id)
            .map(|dto| {
                if let Some(name_full) = indicator.name_full {
                    dto.name_full = name_full;
                }
                if let Some(name_short) = indicator.name_short {
                    dto.name_short = name_short;
                }
                if let Some(level) = indicator.level {
                    dto.level = level;
                }
                if let Some(list_label) = indicator.list_label {
                    dto.list_label = list_label;
                }
                if let Some(parent_id) = indicator.parent_id {
                    dto.parent_id = Some(parent_id);
                }
                dto.clone()
            }))
    }

    async fn get_indicator_values(
        &self,
        indicator_id: i64,
        query: &IndicatorValuesQuery,
    ) -> Result<Vec<IndicatorValueDto>, RepositoryError> {
        Ok(self
            .values
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.indicator_id == indicator_id)
            .filter(|v| query.territory_id.is_none_or(|t| v.territory_id == t))
            .filter(|v| query.date_type.is_none_or(|d| v.date_type == d))
            .filter(|v| query.value_type.is_none_or(|t| v.value_type == t))
            .cloned()
            .collect())
    }

    async fn add_indicator_value(
        &self,
        value: IndicatorValue,
    ) -> Result<IndicatorValueDto, RepositoryError> {
        let mut values = self.values.lock().unwrap();
        let duplicate = values.iter().any(|v| {
            v.indicator_id == value.indicator_id
                && v.territory_id == value.territory_id
                && v.date_type == value.date_type
                && v.date_value == value.date_value
                && v.value_type == value.value_type
        });
        if duplicate {
            return Err(RepositoryError::AlreadyExists(format!(
                "indicator value for indicator {} and territory {}",
                value.indicator_id, value.territory_id
            )));
        }
        let dto = IndicatorValueDto {
            indicator_id: value.indicator_id,
            territory_id: value.territory_id,
            date_type: value.date_type,
            date_value: value.date_value,
            value: value.value,
            value_type: value.value_type,
            information_source: value.information_source,
        };
        values.push(dto.clone());
        Ok(dto)
    }
}

/// Router over in-memory repositories with the given services seeded.
pub fn test_app(service_ids: &[i64]) -> Router {
    let repos = Repos::new(
        Arc::new(InMemoryServices::seeded(service_ids)),
        Arc::new(InMemoryIndicators::default()),
    );
    create_router(bootstrap(repos), &CorsConfig::AllowAll)
}

/// Send a request and decode the JSON response body.
///
/// A `body` of `None` sends an empty body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(serde_json::to_vec(body).unwrap())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
