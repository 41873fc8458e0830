use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GeoError;
use crate::distance;
use crate::geometry::geo_enums::DistanceUnit;
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::Vector2;

/// A single geo-spatial location, latitude and longitude in degrees.
///
/// Equality is exact floating point equality on both coordinates, no tolerance is applied.
/// Coordinates are not range checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Point {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Projects the point onto the plane: `x` is the latitude, `y` the longitude.
    /// Double precision is kept, see [`Vector2::to_single_precision`] for the legacy narrowing.
    pub fn to_vector(&self) -> Vector2 {
        Vector2(self.latitude, self.longitude)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so both must hash alike
        let lat = (self.latitude + 0.0).to_bits();
        let lon = (self.longitude + 0.0).to_bits();
        lat.hash(state);
        lon.hash(state);
    }
}

impl PartialEq<Vector2> for Point {
    fn eq(&self, other: &Vector2) -> bool {
        self.latitude == other.0 && self.longitude == other.1
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        Point::new(v.0, v.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Point::new(latitude, longitude)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.latitude, p.longitude)
    }
}

impl DistanceTo<Point> for Point {
    fn distance_to(&self, other: &Point, unit: DistanceUnit) -> f64 {
        distance::distance(self, other, unit)
    }
}

impl FromStr for Point {
    type Err = GeoError;

    /// Parses `"<latitude>,<longitude>"`, surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GeoError::InvalidPoint(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = lon.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Point::new(latitude, longitude))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
