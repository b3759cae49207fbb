//! Service handlers - service records, their territories and geometry.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use urban_core::schemas::{
    ServiceData, ServiceDataPatch, ServiceDataPost, ServiceDataPut, ServiceDataWithGeometry,
    ServiceWithTerritories, ServicesQuery,
};

use crate::error::HttpError;
use crate::extract::{ApiPath, ApiQuery, PatchJson, ValidatedJson};
use crate::state::AppState;

/// Get a service by id.
pub async fn get(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<i64>,
) -> Result<Json<ServiceData>, HttpError> {
    Ok(Json(state.core.services().get(service_id).await?))
}

/// Get a service with the territories it belongs to.
pub async fn territories(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<i64>,
) -> Result<Json<ServiceWithTerritories>, HttpError> {
    Ok(Json(
        state.core.services().get_with_territories(service_id).await?,
    ))
}

/// List services in a territory.
pub async fn list_by_territory(
    State(state): State<AppState>,
    ApiPath(territory_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<ServicesQuery>,
) -> Result<Json<Vec<ServiceData>>, HttpError> {
    Ok(Json(
        state
            .core
            .services()
            .list_by_territory(territory_id, &query)
            .await?,
    ))
}

/// List services in a territory with geometry and centre point.
pub async fn list_with_geometry_by_territory(
    State(state): State<AppState>,
    ApiPath(territory_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<ServicesQuery>,
) -> Result<Json<Vec<ServiceDataWithGeometry>>, HttpError> {
    Ok(Json(
        state
            .core
            .services()
            .list_with_geometry_by_territory(territory_id, &query)
            .await?,
    ))
}

pub async fn add(
    State(state): State<AppState>,
    ValidatedJson(service): ValidatedJson<ServiceDataPost>,
) -> Result<(StatusCode, Json<ServiceData>), HttpError> {
    let created = state.core.services().add(service).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn put(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<i64>,
    ValidatedJson(service): ValidatedJson<ServiceDataPut>,
) -> Result<Json<ServiceData>, HttpError> {
    Ok(Json(state.core.services().put(service_id, service).await?))
}

pub async fn patch(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<i64>,
    PatchJson(service): PatchJson<ServiceDataPatch>,
) -> Result<Json<ServiceData>, HttpError> {
    Ok(Json(state.core.services().patch(service_id, service).await?))
}
