use crate::geometry::angle::{degrees_to_radians, radians_to_degrees};
use crate::geometry::geo_enums::DistanceUnit;
use crate::geometry::primitives::Point;

/// Unit used by [`distance_default`] when the caller does not choose one.
pub const DEFAULT_UNIT: DistanceUnit = DistanceUnit::NauticalMile;

/// Minutes of arc in one degree
pub const MINUTES_IN_DEGREE: f64 = 60.0;
/// Statute miles covered by one minute of arc (one nautical mile)
pub const STATUTE_MILES_IN_NAUTICAL_MILE: f64 = 1.1515;

/// Great-circle distance between two points, expressed in `unit`.
///
/// Based on the spherical law of cosines. Coordinates are not validated:
/// out of range values yield a well-defined but meaningless result.
pub fn distance(p1: &Point, p2: &Point, unit: DistanceUnit) -> f64 {
    distance_from_degrees(
        p1.latitude(),
        p1.longitude(),
        p2.latitude(),
        p2.longitude(),
        unit,
    )
}

/// [`distance`] expressed in [`DEFAULT_UNIT`] (nautical miles).
pub fn distance_default(p1: &Point, p2: &Point) -> f64 {
    distance(p1, p2, DEFAULT_UNIT)
}

/// Great-circle distance between (`lat1`, `lon1`) and (`lat2`, `lon2`), all in degrees.
pub fn distance_from_degrees(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: DistanceUnit,
) -> f64 {
    let central_angle = radians_to_degrees(central_angle(lat1, lon1, lat2, lon2));
    let miles = central_angle * MINUTES_IN_DEGREE * STATUTE_MILES_IN_NAUTICAL_MILE;
    miles * unit.per_statute_mile()
}

/// Angle (in radians) subtended at the center of the sphere by two surface points,
/// given in degrees.
/// Ranges from 0 (identical points) to π (antipodal points).
pub fn central_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let theta = lon1 - lon2;
    let (lat1, lat2, theta) = (
        degrees_to_radians(lat1),
        degrees_to_radians(lat2),
        degrees_to_radians(theta),
    );
    let cos_central = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * theta.cos();

    // rounding can push (anti)coincident points just outside acos' domain
    cos_central.clamp(-1.0, 1.0).acos()
}
