//! Service type record.

use serde::{Deserialize, Serialize};

/// Service type nested inside service records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceType {
    pub service_type_id: i64,
    pub urban_function_id: i64,
    pub name: String,
    pub capacity_modeled: Option<i64>,
    pub code: String,
}
