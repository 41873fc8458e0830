//! Great-circle distances and point-in-polygon tests on latitude/longitude
//! [`Point`](geometry::primitives::Point)s.
//!
//! Both engines are stateless pure functions over value types:
//! * [`distance`] computes the great-circle distance between two points
//!   (spherical law of cosines).
//! * [`containment`] decides whether a point lies inside a polygon (ray casting).

/// Great-circle distance between two points
pub mod distance;

/// Point-in-polygon tests
pub mod containment;

/// Geometric primitives, enums and traits
pub mod geometry;

/// Importing shapes from and exporting shapes to their external representation
pub mod io;

mod error;

#[doc(inline)]
pub use error::GeoError;
