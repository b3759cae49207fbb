//! Service records and request shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Geometry, ServiceType, ShortTerritory, TerritoryType};
use crate::dto::{PropertyMap, ServiceDto, ServiceWithGeometryDto, ServiceWithTerritoriesDto};
use crate::geometry::geometry_from_native;
use crate::validation::{PatchRequest, Validate, required_nullable};

/// Columns a service listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServicesOrderByField {
    CreatedAt,
    UpdatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    #[default]
    Asc,
    Desc,
}

/// Filters and ordering for service listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesQuery {
    pub order_by: Option<ServicesOrderByField>,
    pub ordering: Ordering,
    pub service_type_id: Option<i64>,
}

/// Service with all its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceData {
    pub service_id: i64,
    pub service_type: ServiceType,
    pub territory_type: Option<TerritoryType>,
    pub name: Option<String>,
    pub capacity_real: Option<i64>,
    #[serde(default)]
    pub properties: PropertyMap,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceDto> for ServiceData {
    fn from(dto: ServiceDto) -> Self {
        let territory_type = dto
            .territory_type_id
            .zip(dto.territory_type_name)
            .map(|(territory_type_id, name)| TerritoryType {
                territory_type_id,
                name,
            });

        Self {
            service_id: dto.service_id,
            service_type: ServiceType {
                service_type_id: dto.service_type_id,
                urban_function_id: dto.urban_function_id,
                name: dto.service_type_name,
                capacity_modeled: dto.service_type_capacity_modeled,
                code: dto.service_type_code,
            },
            territory_type,
            name: dto.name,
            capacity_real: dto.capacity_real,
            properties: dto.properties,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Service with all its attributes and the territories it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceWithTerritories {
    #[serde(flatten)]
    pub service: ServiceData,
    pub territories: Vec<ShortTerritory>,
}

impl From<ServiceWithTerritoriesDto> for ServiceWithTerritories {
    fn from(dto: ServiceWithTerritoriesDto) -> Self {
        Self {
            service: dto.service.into(),
            territories: dto.territories.into_iter().map(ShortTerritory::from).collect(),
        }
    }
}

/// Service with all its attributes, its geometry and centre point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDataWithGeometry {
    #[serde(flatten)]
    pub service: ServiceData,
    pub geometry: Geometry,
    pub centre_point: Geometry,
}

impl From<ServiceWithGeometryDto> for ServiceDataWithGeometry {
    fn from(dto: ServiceWithGeometryDto) -> Self {
        Self {
            geometry: geometry_from_native(&dto.geometry),
            centre_point: geometry_from_native(&dto.centre_point),
            service: dto.service.into(),
        }
    }
}

/// Service creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDataPost {
    pub physical_object_id: i64,
    pub object_geometry_id: i64,
    pub service_type_id: i64,
    #[serde(default)]
    pub territory_type_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capacity_real: Option<i64>,
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Validate for ServiceDataPost {}

/// Full service replacement. Every key must be present; the nullable ones
/// may carry an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDataPut {
    pub service_type_id: i64,
    #[serde(deserialize_with = "required_nullable")]
    pub territory_type_id: Option<i64>,
    #[serde(deserialize_with = "required_nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub capacity_real: Option<i64>,
    pub properties: PropertyMap,
}

impl Validate for ServiceDataPut {}

/// Partial service update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDataPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub territory_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_real: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyMap>,
}

impl ServiceDataPatch {
    /// Every key a patch body may carry.
    pub const FIELDS: &'static [&'static str] = &[
        "service_type_id",
        "territory_type_id",
        "name",
        "capacity_real",
        "properties",
    ];
}

impl Validate for ServiceDataPatch {}
impl PatchRequest for ServiceDataPatch {}
