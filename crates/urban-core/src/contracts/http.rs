//! HTTP route and status constants.
//!
//! Paths use Axum 0.8 brace syntax for parameters and are relative to
//! [`API_PREFIX`].

/// Prefix under which every API route is nested.
pub const API_PREFIX: &str = "/api/v1";

/// Liveness probe, outside the API prefix.
pub const HEALTH_PATH: &str = "/health";

pub const SERVICES_PATH: &str = "/services";
pub const SERVICE_PATH: &str = "/services/{service_id}";
pub const SERVICE_TERRITORIES_PATH: &str = "/services/{service_id}/territories";
pub const TERRITORY_SERVICES_PATH: &str = "/territory/{territory_id}/services";
pub const TERRITORY_SERVICES_WITH_GEOMETRY_PATH: &str =
    "/territory/{territory_id}/services_with_geometry";

pub const MEASUREMENT_UNITS_PATH: &str = "/measurement_units";
pub const INDICATORS_BY_PARENT_PATH: &str = "/indicators_by_parent";
pub const INDICATORS_PATH: &str = "/indicators";
pub const INDICATOR_PATH: &str = "/indicators/{indicator_id}";
pub const INDICATOR_VALUES_PATH: &str = "/indicator/{indicator_id}/values";
pub const INDICATOR_VALUE_CREATE_PATH: &str = "/indicator_values";

/// Status codes owned by the error taxonomy.
pub mod status {
    pub const NOT_FOUND: u16 = 404;
    pub const CONFLICT: u16 = 409;
    pub const UNPROCESSABLE_ENTITY: u16 = 422;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}
