use thiserror::Error;

/// Errors raised by the public API of this crate.
///
/// Numeric domain issues (e.g. rounding pushing an `acos` argument out of `[-1, 1]`) are never
/// surfaced through this type, they are prevented where they arise.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// A required argument was absent.
    #[error("invalid argument: `{0}` must be provided")]
    InvalidArgument(&'static str),
    /// Integer code that does not map to any
    /// [`ShapeKind`](crate::geometry::geo_enums::ShapeKind).
    #[error("unknown shape kind code: {0}")]
    UnknownShapeKind(u16),
    /// Integer code or name that does not map to any
    /// [`DistanceUnit`](crate::geometry::geo_enums::DistanceUnit).
    #[error("unknown distance unit: {0:?}")]
    UnknownDistanceUnit(String),
    /// Text that could not be parsed into a [`Point`](crate::geometry::primitives::Point).
    #[error("invalid point {0:?}, expected \"<latitude>,<longitude>\"")]
    InvalidPoint(String),
}
