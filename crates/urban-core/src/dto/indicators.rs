//! Indicator, indicator value and measurement unit DTOs.

use chrono::{DateTime, Utc};

use crate::schemas::{DateType, ValueType};

/// Indicator row. `parent_id` is the ownership edge inside the indicator forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorDto {
    pub indicator_id: i64,
    pub name_full: String,
    pub name_short: String,
    pub measurement_unit_id: Option<i64>,
    pub level: i32,
    pub list_label: String,
    pub parent_id: Option<i64>,
}

/// Indicator value fact, keyed by indicator, territory, date and value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorValueDto {
    pub indicator_id: i64,
    pub territory_id: i64,
    pub date_type: DateType,
    pub date_value: DateTime<Utc>,
    pub value: i64,
    pub value_type: ValueType,
    pub information_source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementUnitDto {
    pub measurement_unit_id: i64,
    pub name: String,
}
