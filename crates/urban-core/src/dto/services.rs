//! Service DTOs.

use chrono::{DateTime, Utc};

use super::PropertyMap;
use crate::geometry::NativeGeometry;

/// Service row joined with its service type and territory type columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDto {
    pub service_id: i64,
    pub service_type_id: i64,
    pub urban_function_id: i64,
    pub service_type_name: String,
    pub service_type_capacity_modeled: Option<i64>,
    pub service_type_code: String,
    pub territory_type_id: Option<i64>,
    pub territory_type_name: Option<String>,
    pub name: Option<String>,
    pub capacity_real: Option<i64>,
    pub properties: PropertyMap,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Territory reference row aggregated next to a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortTerritoryDto {
    pub territory_id: i64,
    pub name: String,
}

/// Service with the territories it belongs to, in query order.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceWithTerritoriesDto {
    pub service: ServiceDto,
    pub territories: Vec<ShortTerritoryDto>,
}

/// Service with its object geometry and centre point.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceWithGeometryDto {
    pub service: ServiceDto,
    pub geometry: NativeGeometry,
    pub centre_point: NativeGeometry,
}
