use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::GeoError;

/// Statute miles per kilometer conversion factor (1 mile = 1.609344 km)
pub const KILOMETERS_IN_MILE: f64 = 1.609344;
/// Nautical miles per statute mile conversion factor
pub const NAUTICAL_MILES_IN_MILE: f64 = 0.8684;

/// Units in which a distance can be expressed.
/// Serialized as its integer code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum DistanceUnit {
    /// Statute mile
    #[default]
    Mile = 0,
    Kilometer = 1,
    NauticalMile = 2,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 3] = [
        DistanceUnit::Mile,
        DistanceUnit::Kilometer,
        DistanceUnit::NauticalMile,
    ];

    /// How many of this unit make up one statute mile
    pub fn per_statute_mile(self) -> f64 {
        match self {
            DistanceUnit::Mile => 1.0,
            DistanceUnit::Kilometer => KILOMETERS_IN_MILE,
            DistanceUnit::NauticalMile => NAUTICAL_MILES_IN_MILE,
        }
    }

    /// Short symbol of the unit (`mi`, `km`, `nmi`)
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Mile => "mi",
            DistanceUnit::Kilometer => "km",
            DistanceUnit::NauticalMile => "nmi",
        }
    }
}

impl TryFrom<u8> for DistanceUnit {
    type Error = GeoError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(DistanceUnit::Mile),
            1 => Ok(DistanceUnit::Kilometer),
            2 => Ok(DistanceUnit::NauticalMile),
            _ => Err(GeoError::UnknownDistanceUnit(code.to_string())),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Mile),
            "km" | "kilometer" | "kilometers" => Ok(DistanceUnit::Kilometer),
            "nmi" | "nm" | "nautical-mile" | "nautical-miles" => Ok(DistanceUnit::NauticalMile),
            _ => Err(GeoError::UnknownDistanceUnit(s.to_string())),
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The supported kinds of shapes.
///
/// The integer codes are part of the external representation and must remain stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum ShapeKind {
    /// A central point and a radius
    Circle = 0,
    /// An open path through a sequence of points
    Polyline = 100,
    /// A closed boundary through a sequence of points
    Polygon = 200,
}

impl ShapeKind {
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl From<ShapeKind> for u16 {
    fn from(kind: ShapeKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u16> for ShapeKind {
    type Error = GeoError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ShapeKind::Circle),
            100 => Ok(ShapeKind::Polyline),
            200 => Ok(ShapeKind::Polygon),
            _ => Err(GeoError::UnknownShapeKind(code)),
        }
    }
}
