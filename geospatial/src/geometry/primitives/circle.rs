use crate::geometry::geo_enums::{DistanceUnit, ShapeKind};
use crate::geometry::geo_traits::{DistanceTo, Encloses, GeoShape};
use crate::geometry::primitives::Point;

/// Geo-spatial circle: every location within `radius` great-circle distance of `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    /// Radius, expressed in `unit`
    pub radius: f64,
    pub unit: DistanceUnit,
}

impl Circle {
    /// `radius` must be finite and non-negative.
    /// This is only asserted in debug builds; external input is validated by
    /// [`import_shape`](crate::io::import::import_shape) instead.
    pub fn new(center: Point, radius: f64, unit: DistanceUnit) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {}",
            radius
        );

        Self {
            center,
            radius,
            unit,
        }
    }

    /// Radius of the circle converted to `unit`
    pub fn radius_in(&self, unit: DistanceUnit) -> f64 {
        self.radius / self.unit.per_statute_mile() * unit.per_statute_mile()
    }
}

impl GeoShape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

impl Encloses<Point> for Circle {
    fn encloses(&self, point: &Point) -> bool {
        self.center.distance_to(point, self.unit) <= self.radius
    }
}
