//! Territory records referenced from other entities.

use serde::{Deserialize, Serialize};

use crate::dto::ShortTerritoryDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryType {
    pub territory_type_id: i64,
    pub name: String,
}

/// Lightweight territory reference (id and name only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortTerritory {
    pub territory_id: i64,
    pub name: String,
}

impl From<ShortTerritoryDto> for ShortTerritory {
    fn from(dto: ShortTerritoryDto) -> Self {
        Self {
            territory_id: dto.territory_id,
            name: dto.name,
        }
    }
}
