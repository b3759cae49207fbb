//! Geometry record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::geometry::{Coordinate, NativeGeometry};
use crate::validation::Validate;

/// Kind of a geometry record, spelled as in GeoJSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

impl GeometryType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
        }
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry with GeoJSON-style nested coordinate arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    pub coordinates: Value,
}

impl Geometry {
    /// Decode the coordinate array into an engine value.
    ///
    /// Lines need at least two positions. Polygon rings need at least four
    /// positions and must be closed (first position equals the last).
    pub fn to_native(&self) -> Result<NativeGeometry, ValidationError> {
        let native = match self.geometry_type {
            GeometryType::Point => NativeGeometry::Point(self.decode()?),
            GeometryType::MultiPoint => {
                let points: Vec<Coordinate> = self.decode()?;
                self.non_empty(&points)?;
                NativeGeometry::MultiPoint(points)
            }
            GeometryType::LineString => {
                let line: Vec<Coordinate> = self.decode()?;
                self.check_line(&line)?;
                NativeGeometry::LineString(line)
            }
            GeometryType::MultiLineString => {
                let lines: Vec<Vec<Coordinate>> = self.decode()?;
                self.non_empty(&lines)?;
                for line in &lines {
                    self.check_line(line)?;
                }
                NativeGeometry::MultiLineString(lines)
            }
            GeometryType::Polygon => {
                let rings: Vec<Vec<Coordinate>> = self.decode()?;
                self.check_polygon(&rings)?;
                NativeGeometry::Polygon(rings)
            }
            GeometryType::MultiPolygon => {
                let polygons: Vec<Vec<Vec<Coordinate>>> = self.decode()?;
                self.non_empty(&polygons)?;
                for rings in &polygons {
                    self.check_polygon(rings)?;
                }
                NativeGeometry::MultiPolygon(polygons)
            }
        };
        Ok(native)
    }

    fn decode<T: DeserializeOwned>(&self) -> Result<T, ValidationError> {
        serde_json::from_value(self.coordinates.clone()).map_err(|e| {
            ValidationError::new(format!(
                "invalid coordinates for {} geometry: {e}",
                self.geometry_type
            ))
        })
    }

    fn non_empty<T>(&self, items: &[T]) -> Result<(), ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::new(format!(
                "{} geometry cannot be empty",
                self.geometry_type
            )));
        }
        Ok(())
    }

    fn check_line(&self, line: &[Coordinate]) -> Result<(), ValidationError> {
        if line.len() < 2 {
            return Err(ValidationError::new(format!(
                "{} geometry requires at least 2 positions per line",
                self.geometry_type
            )));
        }
        Ok(())
    }

    fn check_polygon(&self, rings: &[Vec<Coordinate>]) -> Result<(), ValidationError> {
        self.non_empty(rings)?;
        for ring in rings {
            if ring.len() < 4 {
                return Err(ValidationError::new(format!(
                    "{} ring requires at least 4 positions",
                    self.geometry_type
                )));
            }
            if ring.first() != ring.last() {
                return Err(ValidationError::new(format!(
                    "{} ring must be closed",
                    self.geometry_type
                )));
            }
        }
        Ok(())
    }
}

impl Validate for Geometry {
    fn validate(&self) -> Result<(), ValidationError> {
        self.to_native().map(|_| ())
    }
}
