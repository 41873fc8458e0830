use crate::geometry::geo_enums::{DistanceUnit, ShapeKind};

/// Trait for types that report which [`ShapeKind`] they are.
pub trait GeoShape {
    fn kind(&self) -> ShapeKind;
}

/// Trait for types that can decide whether `T` lies within `Self`.
///
/// Membership of points exactly on the boundary is undefined for polygons.
pub trait Encloses<T> {
    fn encloses(&self, other: &T) -> bool;
}

/// Trait for types that can compute the great-circle distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Great-circle distance between `self` and `other`, expressed in `unit`.
    fn distance_to(&self, other: &T, unit: DistanceUnit) -> f64;
}
