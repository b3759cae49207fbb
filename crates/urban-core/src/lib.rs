#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod dto;
pub mod error;
pub mod geometry;
pub mod ports;
pub mod schemas;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use dto::{
    IndicatorDto, IndicatorValueDto, MeasurementUnitDto, PropertyMap, ServiceDto,
    ServiceWithGeometryDto, ServiceWithTerritoriesDto, ShortTerritoryDto,
};
pub use error::{EntityNotFoundById, UrbanApiError, ValidationError};
pub use geometry::{Coordinate, NativeGeometry, geometry_from_native};
pub use ports::{IndicatorRepository, Repos, RepositoryError, ServiceRepository};
pub use schemas::{
    DateType, Geometry, GeometryType, Indicator, IndicatorPatch, IndicatorPost, IndicatorValue,
    IndicatorValuesQuery, IndicatorsByParentQuery, MeasurementUnit, MeasurementUnitPost, Ordering,
    ServiceData, ServiceDataPatch, ServiceDataPost, ServiceDataPut, ServiceDataWithGeometry,
    ServiceType, ServiceWithTerritories, ServicesOrderByField, ServicesQuery, ShortTerritory,
    TerritoryType, ValueType,
};
pub use services::{AppCore, IndicatorCatalog, ServiceRegistry};
pub use validation::{PatchRequest, Validate, parse_patch, parse_request};

// proptest drives the integration tests under tests/
#[cfg(test)]
use proptest as _;
