/// Conversions between degrees and radians
pub mod angle;

pub mod geo_enums;
pub mod geo_traits;

/// Points, planar vectors and the shapes built from them
pub mod primitives;
