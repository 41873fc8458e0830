use std::f64::consts::PI;

/// Converts an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(rad: f64) -> f64 {
    rad / PI * 180.0
}
