//! Externally-shaped records exchanged with the request-handling boundary.
//!
//! # Structure
//!
//! - Read-side records (`ServiceData`, `Indicator`, ...) are built from DTOs
//!   through `From` conversions. Projection never fails.
//! - Write-side requests come in three shapes per writable entity: create
//!   (`*Post`), replace (`*Put`) and patch (`*Patch`). See
//!   [`crate::validation`] for how bodies are checked.

mod geometries;
mod indicators;
mod service_types;
mod services;
mod territories;

pub use geometries::{Geometry, GeometryType};
pub use indicators::{
    DateType, Indicator, IndicatorPatch, IndicatorPost, IndicatorValue, IndicatorValuesQuery,
    IndicatorsByParentQuery, MeasurementUnit, MeasurementUnitPost, ValueType,
};
pub use service_types::ServiceType;
pub use services::{
    Ordering, ServiceData, ServiceDataPatch, ServiceDataPost, ServiceDataPut,
    ServiceDataWithGeometry, ServiceWithTerritories, ServicesOrderByField, ServicesQuery,
};
pub use territories::{ShortTerritory, TerritoryType};
