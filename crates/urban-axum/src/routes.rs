//! Route definitions and router construction.
//!
//! Paths come from `urban_core::contracts::http` and use Axum 0.8 brace
//! syntax for parameters.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use urban_core::contracts::http::{
    API_PREFIX, HEALTH_PATH, INDICATOR_PATH, INDICATOR_VALUE_CREATE_PATH, INDICATOR_VALUES_PATH,
    INDICATORS_BY_PARENT_PATH, INDICATORS_PATH, MEASUREMENT_UNITS_PATH, SERVICE_PATH,
    SERVICE_TERRITORIES_PATH, SERVICES_PATH, TERRITORY_SERVICES_PATH,
    TERRITORY_SERVICES_WITH_GEOMETRY_PATH,
};

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers::{indicators, services};
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(target: "urban.server", origin = %o, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the version prefix.
///
/// The router is typed as `Router<AppState>` WITHOUT `.with_state()` applied;
/// the caller applies state before nesting it under [`API_PREFIX`].
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Services API
        .route(SERVICES_PATH, post(services::add))
        .route(
            SERVICE_PATH,
            get(services::get)
                .put(services::put)
                .patch(services::patch),
        )
        .route(SERVICE_TERRITORIES_PATH, get(services::territories))
        .route(TERRITORY_SERVICES_PATH, get(services::list_by_territory))
        .route(
            TERRITORY_SERVICES_WITH_GEOMETRY_PATH,
            get(services::list_with_geometry_by_territory),
        )
        // Indicators API
        .route(
            MEASUREMENT_UNITS_PATH,
            get(indicators::measurement_units).post(indicators::add_measurement_unit),
        )
        .route(INDICATORS_BY_PARENT_PATH, get(indicators::by_parent))
        .route(INDICATORS_PATH, post(indicators::add))
        .route(
            INDICATOR_PATH,
            get(indicators::get).patch(indicators::patch),
        )
        .route(INDICATOR_VALUES_PATH, get(indicators::values))
        .route(INDICATOR_VALUE_CREATE_PATH, post(indicators::add_value))
}

/// Create the main Axum router with all API routes and the health probe.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .nest(API_PREFIX, api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
