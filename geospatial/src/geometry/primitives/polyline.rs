use itertools::Itertools;

use crate::geometry::geo_enums::{DistanceUnit, ShapeKind};
use crate::geometry::geo_traits::{DistanceTo, GeoShape};
use crate::geometry::primitives::Point;

/// Open path through an ordered sequence of [`Point`]s
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Polyline { points }
    }

    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Sum of the great-circle distances between consecutive points
    pub fn length(&self, unit: DistanceUnit) -> f64 {
        self.points
            .iter()
            .tuple_windows()
            .map(|(p1, p2)| p1.distance_to(p2, unit))
            .sum()
    }
}

impl GeoShape for Polyline {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polyline
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Polyline::new(points)
    }
}
