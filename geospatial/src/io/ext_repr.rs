use serde::{Deserialize, Serialize};

use crate::geometry::geo_enums::{DistanceUnit, ShapeKind};

/// External representation of a [`Point`](crate::geometry::primitives::Point), in degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// External representation of a [`Shape`](crate::geometry::primitives::Shape).
///
/// The `kind` is serialized as its integer code (`0`: circle, `100`: polyline, `200`: polygon)
/// and determines which of the remaining fields are relevant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtShape {
    pub kind: ShapeKind,
    /// Ordered points of a polyline or polygon boundary
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub points: Vec<ExtPoint>,
    /// Center of a circle
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub center: Option<ExtPoint>,
    /// Radius of a circle, expressed in `unit`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub radius: Option<f64>,
    /// Unit of `radius`, integer code. Statute miles if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub unit: Option<DistanceUnit>,
}
