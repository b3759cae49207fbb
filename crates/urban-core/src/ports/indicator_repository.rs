//! Indicator repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::dto::{IndicatorDto, IndicatorValueDto, MeasurementUnitDto};
use crate::schemas::{
    IndicatorPatch, IndicatorPost, IndicatorValue, IndicatorValuesQuery, MeasurementUnitPost,
};

/// Repository for indicators, their values and measurement units.
#[async_trait]
pub trait IndicatorRepository: Send + Sync {
    async fn get_measurement_units(&self) -> Result<Vec<MeasurementUnitDto>, RepositoryError>;

    async fn add_measurement_unit(
        &self,
        unit: MeasurementUnitPost,
    ) -> Result<MeasurementUnitDto, RepositoryError>;

    /// Direct children of `parent_id`, or the roots when it is `None`.
    async fn get_indicators_by_parent(
        &self,
        parent_id: Option<i64>,
    ) -> Result<Vec<IndicatorDto>, RepositoryError>;

    async fn get_indicator_by_id(
        &self,
        indicator_id: i64,
    ) -> Result<Option<IndicatorDto>, RepositoryError>;

    async fn add_indicator(&self, indicator: IndicatorPost) -> Result<IndicatorDto, RepositoryError>;

    /// Update only the fields set in `indicator`. Returns `None` if the indicator is absent.
    async fn patch_indicator(
        &self,
        indicator_id: i64,
        indicator: IndicatorPatch,
    ) -> Result<Option<IndicatorDto>, RepositoryError>;

    async fn get_indicator_values(
        &self,
        indicator_id: i64,
        query: &IndicatorValuesQuery,
    ) -> Result<Vec<IndicatorValueDto>, RepositoryError>;

    /// Insert a value.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a value with the same indicator, territory, date
    ///   type, date and value type is stored
    async fn add_indicator_value(
        &self,
        value: IndicatorValue,
    ) -> Result<IndicatorValueDto, RepositoryError>;
}
