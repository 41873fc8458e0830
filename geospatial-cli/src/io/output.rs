use geospatial::geometry::geo_enums::ShapeKind;
use geospatial::geometry::primitives::Point;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DistanceOutput {
    pub from: Point,
    pub to: Point,
    pub distance: f64,
    /// Symbol of the unit `distance` is expressed in
    pub unit: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContainsOutput {
    pub point: Point,
    /// Integer code of the shape's kind
    pub kind: ShapeKind,
    pub inside: bool,
}

/// Which size a [`ShapeSummary`] reports
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Radius,
    Length,
    Perimeter,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShapeSummary {
    pub index: usize,
    pub kind: ShapeKind,
    pub n_points: usize,
    pub measure: Measure,
    pub value: f64,
    pub unit: String,
}
