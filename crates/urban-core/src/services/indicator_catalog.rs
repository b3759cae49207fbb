//! Indicator catalog - orchestrates indicators, their values and
//! measurement units.

use std::collections::HashSet;
use std::sync::Arc;

use crate::dto::IndicatorDto;
use crate::error::{EntityNotFoundById, UrbanApiError, ValidationError};
use crate::ports::IndicatorRepository;
use crate::schemas::{
    Indicator, IndicatorPatch, IndicatorPost, IndicatorValue, IndicatorValuesQuery,
    MeasurementUnit, MeasurementUnitPost,
};

const INDICATOR: &str = "indicator";

pub struct IndicatorCatalog {
    repo: Arc<dyn IndicatorRepository>,
}

impl IndicatorCatalog {
    pub fn new(repo: Arc<dyn IndicatorRepository>) -> Self {
        Self { repo }
    }

    pub async fn measurement_units(&self) -> Result<Vec<MeasurementUnit>, UrbanApiError> {
        let units = self.repo.get_measurement_units().await?;
        Ok(units.into_iter().map(MeasurementUnit::from).collect())
    }

    pub async fn add_measurement_unit(
        &self,
        unit: MeasurementUnitPost,
    ) -> Result<MeasurementUnit, UrbanApiError> {
        let dto = self.repo.add_measurement_unit(unit).await?;
        tracing::info!(measurement_unit_id = dto.measurement_unit_id, "measurement unit created");
        Ok(dto.into())
    }

    /// Direct children of `parent_id`, or the root indicators.
    ///
    /// A parent id that names no indicator is reported as not found rather
    /// than producing an empty list.
    pub async fn by_parent(&self, parent_id: Option<i64>) -> Result<Vec<Indicator>, UrbanApiError> {
        if let Some(parent_id) = parent_id {
            self.ensure_exists(parent_id).await?;
        }
        let indicators = self.repo.get_indicators_by_parent(parent_id).await?;
        Ok(indicators.into_iter().map(Indicator::from).collect())
    }

    pub async fn get(&self, indicator_id: i64) -> Result<Indicator, UrbanApiError> {
        self.repo
            .get_indicator_by_id(indicator_id)
            .await?
            .map(Indicator::from)
            .ok_or_else(|| EntityNotFoundById::new(indicator_id, INDICATOR).into())
    }

    /// Create an indicator.
    ///
    /// A referenced parent must exist and `level` must be one below it; a
    /// root must have level 1.
    pub async fn add(&self, indicator: IndicatorPost) -> Result<Indicator, UrbanApiError> {
        let parent = match indicator.parent_id {
            Some(parent_id) => Some(self.find(parent_id).await?),
            None => None,
        };
        check_depth(indicator.level, parent.as_ref())?;
        let dto = self.repo.add_indicator(indicator).await?;
        tracing::info!(indicator_id = dto.indicator_id, level = dto.level, "indicator created");
        Ok(dto.into())
    }

    /// Update only the fields set in the patch.
    ///
    /// A new parent must exist and must not be the indicator itself or one of
    /// its descendants. After the update `level` must still be one below the
    /// parent. The level of an indicator with children cannot change, since
    /// their levels are not rewritten.
    pub async fn patch(
        &self,
        indicator_id: i64,
        indicator: IndicatorPatch,
    ) -> Result<Indicator, UrbanApiError> {
        let current = self.find(indicator_id).await?;

        if indicator.parent_id.is_some() || indicator.level.is_some() {
            let parent_id = indicator.parent_id.or(current.parent_id);
            let level = indicator.level.unwrap_or(current.level);

            if let Some(new_parent) = indicator.parent_id {
                self.check_not_descendant(indicator_id, new_parent).await?;
            }
            let parent = match parent_id {
                Some(parent_id) => Some(self.find(parent_id).await?),
                None => None,
            };
            check_depth(level, parent.as_ref())?;

            if level != current.level
                && !self
                    .repo
                    .get_indicators_by_parent(Some(indicator_id))
                    .await?
                    .is_empty()
            {
                return Err(ValidationError::new(format!(
                    "level of indicator {indicator_id} cannot change while it has children"
                ))
                .into());
            }
        }

        let dto = self
            .repo
            .patch_indicator(indicator_id, indicator)
            .await?
            .ok_or_else(|| EntityNotFoundById::new(indicator_id, INDICATOR))?;
        tracing::info!(indicator_id, "indicator patched");
        Ok(dto.into())
    }

    pub async fn values(
        &self,
        indicator_id: i64,
        query: &IndicatorValuesQuery,
    ) -> Result<Vec<IndicatorValue>, UrbanApiError> {
        self.ensure_exists(indicator_id).await?;
        let values = self.repo.get_indicator_values(indicator_id, query).await?;
        Ok(values.into_iter().map(IndicatorValue::from).collect())
    }

    /// Store a value for an existing indicator.
    pub async fn add_value(&self, value: IndicatorValue) -> Result<IndicatorValue, UrbanApiError> {
        self.ensure_exists(value.indicator_id).await?;
        let dto = self.repo.add_indicator_value(value).await?;
        tracing::info!(
            indicator_id = dto.indicator_id,
            territory_id = dto.territory_id,
            date_type = %dto.date_type,
            value_type = %dto.value_type,
            "indicator value created"
        );
        Ok(dto.into())
    }

    async fn find(&self, indicator_id: i64) -> Result<IndicatorDto, UrbanApiError> {
        self.repo
            .get_indicator_by_id(indicator_id)
            .await?
            .ok_or_else(|| EntityNotFoundById::new(indicator_id, INDICATOR).into())
    }

    async fn ensure_exists(&self, indicator_id: i64) -> Result<(), UrbanApiError> {
        self.find(indicator_id).await.map(|_| ())
    }

    /// Walk up from `new_parent` and fail if `indicator_id` is on the path.
    async fn check_not_descendant(
        &self,
        indicator_id: i64,
        new_parent: i64,
    ) -> Result<(), UrbanApiError> {
        if new_parent == indicator_id {
            return Err(ValidationError::new(format!(
                "indicator {indicator_id} cannot be its own parent"
            ))
            .into());
        }

        let mut seen = HashSet::new();
        let mut cursor = Some(new_parent);
        while let Some(ancestor_id) = cursor {
            if ancestor_id == indicator_id {
                return Err(ValidationError::new(format!(
                    "indicator {new_parent} is a descendant of indicator {indicator_id}"
                ))
                .into());
            }
            if !seen.insert(ancestor_id) {
                tracing::warn!(indicator_id = ancestor_id, "cycle in stored indicator tree");
                break;
            }
            cursor = self.find(ancestor_id).await?.parent_id;
        }
        Ok(())
    }
}

/// `level` must be one below the parent, or 1 for a root.
fn check_depth(level: i32, parent: Option<&IndicatorDto>) -> Result<(), ValidationError> {
    match parent {
        Some(parent) if level != parent.level + 1 => Err(ValidationError::new(format!(
            "level must be {} under indicator {}, got {level}",
            parent.level + 1,
            parent.indicator_id
        ))),
        None if level != 1 => Err(ValidationError::new(format!(
            "root indicator level must be 1, got {level}"
        ))),
        _ => Ok(()),
    }
}
