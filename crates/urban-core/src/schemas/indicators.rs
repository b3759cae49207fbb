//! Indicator, indicator value and measurement unit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::{IndicatorDto, IndicatorValueDto, MeasurementUnitDto};
use crate::error::ValidationError;
use crate::validation::{PatchRequest, Validate};

/// Time interval an indicator value covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateType {
    Year,
    HalfYear,
    Quarter,
    Month,
    Day,
}

impl DateType {
    /// Parse a date type from its wire spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "year" => Some(Self::Year),
            "half_year" => Some(Self::HalfYear),
            "quarter" => Some(Self::Quarter),
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::HalfYear => "half_year",
            Self::Quarter => "quarter",
            Self::Month => "month",
            Self::Day => "day",
        }
    }
}

impl std::fmt::Display for DateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an indicator value is measured, forecast or a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Real,
    Forecast,
    Target,
}

impl ValueType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "real" => Some(Self::Real),
            "forecast" => Some(Self::Forecast),
            "target" => Some(Self::Target),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Forecast => "forecast",
            Self::Target => "target",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicator with all its attributes.
///
/// `level` is the number of indicators above this one in the tree plus one,
/// so roots have level 1. `list_label` is the dotted marker used in lists
/// (e.g. `1.1.1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub indicator_id: i64,
    pub name_full: String,
    pub name_short: String,
    pub measurement_unit_id: Option<i64>,
    pub level: i32,
    pub list_label: String,
    pub parent_id: Option<i64>,
}

impl From<IndicatorDto> for Indicator {
    fn from(dto: IndicatorDto) -> Self {
        Self {
            indicator_id: dto.indicator_id,
            name_full: dto.name_full,
            name_short: dto.name_short,
            measurement_unit_id: dto.measurement_unit_id,
            level: dto.level,
            list_label: dto.list_label,
            parent_id: dto.parent_id,
        }
    }
}

fn check_level(level: i32) -> Result<(), ValidationError> {
    if level < 1 {
        return Err(ValidationError::new(format!(
            "level must be greater than or equal to 1, got {level}"
        )));
    }
    Ok(())
}

/// Indicator creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorPost {
    pub name_full: String,
    pub name_short: String,
    #[serde(default)]
    pub measurement_unit_id: Option<i64>,
    pub level: i32,
    pub list_label: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl Validate for IndicatorPost {
    fn validate(&self) -> Result<(), ValidationError> {
        check_level(self.level)
    }
}

/// Partial indicator update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndicatorPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_full: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_unit_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl IndicatorPatch {
    /// Every key a patch body may carry.
    pub const FIELDS: &'static [&'static str] = &[
        "name_full",
        "name_short",
        "measurement_unit_id",
        "level",
        "list_label",
        "parent_id",
    ];
}

impl Validate for IndicatorPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        self.level.map_or(Ok(()), check_level)
    }
}

impl PatchRequest for IndicatorPatch {}

/// Indicator value with all its attributes. Also the creation request shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub indicator_id: i64,
    pub territory_id: i64,
    pub date_type: DateType,
    pub date_value: DateTime<Utc>,
    pub value: i64,
    pub value_type: ValueType,
    pub information_source: String,
}

impl From<IndicatorValueDto> for IndicatorValue {
    fn from(dto: IndicatorValueDto) -> Self {
        Self {
            indicator_id: dto.indicator_id,
            territory_id: dto.territory_id,
            date_type: dto.date_type,
            date_value: dto.date_value,
            value: dto.value,
            value_type: dto.value_type,
            information_source: dto.information_source,
        }
    }
}

impl Validate for IndicatorValue {}

/// Filters for indicator value listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorValuesQuery {
    pub territory_id: Option<i64>,
    pub date_type: Option<DateType>,
    pub value_type: Option<ValueType>,
}

/// Parent filter for indicator listings; `None` selects the roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorsByParentQuery {
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementUnit {
    pub measurement_unit_id: i64,
    pub name: String,
}

impl From<MeasurementUnitDto> for MeasurementUnit {
    fn from(dto: MeasurementUnitDto) -> Self {
        Self {
            measurement_unit_id: dto.measurement_unit_id,
            name: dto.name,
        }
    }
}

/// Measurement unit creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementUnitPost {
    pub name: String,
}

impl Validate for MeasurementUnitPost {}
