//! Data Transfer Objects returned by the persistence collaborator.
//!
//! DTOs mirror stored and joined columns one-to-one. They carry no behaviour;
//! the schema layer projects them into externally-shaped records.

mod indicators;
mod services;

pub use indicators::{IndicatorDto, IndicatorValueDto, MeasurementUnitDto};
pub use services::{ServiceDto, ServiceWithGeometryDto, ServiceWithTerritoriesDto, ShortTerritoryDto};

/// Open-ended property map: string keys to arbitrary JSON values.
pub type PropertyMap = serde_json::Map<String, serde_json::Value>;
