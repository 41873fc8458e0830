use itertools::Itertools;

use crate::containment;
use crate::geometry::geo_enums::{DistanceUnit, ShapeKind};
use crate::geometry::geo_traits::{DistanceTo, Encloses, GeoShape};
use crate::geometry::primitives::{Point, Vector2};

/// Closed boundary through an ordered sequence of [`Point`]s, without holes.
///
/// The last point connects back to the first one, it should not be repeated.
/// At least three points are required for a meaningful polygon, this is not enforced:
/// degenerate polygons enclose nothing.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Polygon { points }
    }

    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has enough points to enclose an area
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    /// The boundary projected onto the plane, in traversal order
    pub fn vertices(&self) -> Vec<Vector2> {
        self.points.iter().map(Point::to_vector).collect()
    }

    /// Sum of the great-circle lengths of all edges, including the closing one
    pub fn perimeter(&self, unit: DistanceUnit) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.points
            .iter()
            .circular_tuple_windows()
            .map(|(p1, p2)| p1.distance_to(p2, unit))
            .sum()
    }
}

impl GeoShape for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }
}

impl Encloses<Point> for Polygon {
    fn encloses(&self, point: &Point) -> bool {
        containment::ray_cast(point.to_vector(), &self.vertices())
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Polygon::new(points)
    }
}
