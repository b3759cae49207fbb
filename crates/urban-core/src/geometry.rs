//! Geometry engine values and their conversion into geometry records.
//!
//! `NativeGeometry` is what the geometry collaborator hands over alongside a
//! DTO: strongly typed coordinates, one `[x, y]` pair per position. The
//! externally-shaped record is [`Geometry`], whose coordinates are a loose
//! GeoJSON-style nested array.

use serde_json::{Number, Value};

use crate::schemas::{Geometry, GeometryType};

/// A single `[x, y]` position.
pub type Coordinate = [f64; 2];

/// Geometry as produced by the geometry engine.
///
/// Polygons are a list of rings, exterior ring first.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeGeometry {
    Point(Coordinate),
    MultiPoint(Vec<Coordinate>),
    LineString(Vec<Coordinate>),
    MultiLineString(Vec<Vec<Coordinate>>),
    Polygon(Vec<Vec<Coordinate>>),
    MultiPolygon(Vec<Vec<Vec<Coordinate>>>),
}

impl NativeGeometry {
    pub const fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::LineString(_) => GeometryType::LineString,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
        }
    }
}

/// Build the externally-shaped geometry record from an engine value.
///
/// Never fails. Coordinate order is preserved; a non-finite ordinate, which
/// JSON cannot represent, is written as `null`.
pub fn geometry_from_native(native: &NativeGeometry) -> Geometry {
    let coordinates = match native {
        NativeGeometry::Point(c) => position(c),
        NativeGeometry::MultiPoint(cs) | NativeGeometry::LineString(cs) => positions(cs),
        NativeGeometry::MultiLineString(lines) | NativeGeometry::Polygon(lines) => {
            Value::Array(lines.iter().map(|l| positions(l)).collect())
        }
        NativeGeometry::MultiPolygon(polygons) => Value::Array(
            polygons
                .iter()
                .map(|rings| Value::Array(rings.iter().map(|r| positions(r)).collect()))
                .collect(),
        ),
    };

    Geometry {
        geometry_type: native.geometry_type(),
        coordinates,
    }
}

fn ordinate(v: f64) -> Value {
    Number::from_f64(v).map_or(Value::Null, Value::Number)
}

fn position(c: &Coordinate) -> Value {
    Value::Array(vec![ordinate(c[0]), ordinate(c[1])])
}

fn positions(cs: &[Coordinate]) -> Value {
    Value::Array(cs.iter().map(position).collect())
}
