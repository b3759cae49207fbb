//! Indicator handlers - indicator tree, values and measurement units.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use urban_core::schemas::{
    Indicator, IndicatorPatch, IndicatorPost, IndicatorValue, IndicatorValuesQuery,
    IndicatorsByParentQuery, MeasurementUnit, MeasurementUnitPost,
};

use crate::error::HttpError;
use crate::extract::{ApiPath, ApiQuery, PatchJson, ValidatedJson};
use crate::state::AppState;

pub async fn measurement_units(
    State(state): State<AppState>,
) -> Result<Json<Vec<MeasurementUnit>>, HttpError> {
    Ok(Json(state.core.indicators().measurement_units().await?))
}

pub async fn add_measurement_unit(
    State(state): State<AppState>,
    ValidatedJson(unit): ValidatedJson<MeasurementUnitPost>,
) -> Result<(StatusCode, Json<MeasurementUnit>), HttpError> {
    let created = state.core.indicators().add_measurement_unit(unit).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List direct children of `parent_id`, or the roots when it is omitted.
pub async fn by_parent(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IndicatorsByParentQuery>,
) -> Result<Json<Vec<Indicator>>, HttpError> {
    Ok(Json(state.core.indicators().by_parent(query.parent_id).await?))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(indicator_id): ApiPath<i64>,
) -> Result<Json<Indicator>, HttpError> {
    Ok(Json(state.core.indicators().get(indicator_id).await?))
}

pub async fn add(
    State(state): State<AppState>,
    ValidatedJson(indicator): ValidatedJson<IndicatorPost>,
) -> Result<(StatusCode, Json<Indicator>), HttpError> {
    let created = state.core.indicators().add(indicator).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn patch(
    State(state): State<AppState>,
    ApiPath(indicator_id): ApiPath<i64>,
    PatchJson(indicator): PatchJson<IndicatorPatch>,
) -> Result<Json<Indicator>, HttpError> {
    Ok(Json(
        state.core.indicators().patch(indicator_id, indicator).await?,
    ))
}

/// List values of an indicator, optionally filtered.
pub async fn values(
    State(state): State<AppState>,
    ApiPath(indicator_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<IndicatorValuesQuery>,
) -> Result<Json<Vec<IndicatorValue>>, HttpError> {
    Ok(Json(
        state.core.indicators().values(indicator_id, &query).await?,
    ))
}

pub async fn add_value(
    State(state): State<AppState>,
    ValidatedJson(value): ValidatedJson<IndicatorValue>,
) -> Result<(StatusCode, Json<IndicatorValue>), HttpError> {
    let created = state.core.indicators().add_value(value).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
