use crate::geometry::geo_enums::ShapeKind;
use crate::geometry::geo_traits::{Encloses, GeoShape};
use crate::geometry::primitives::{Circle, Point, Polygon, Polyline};

/// Any of the supported geo-spatial shapes
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl Shape {
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }
}

impl GeoShape for Shape {
    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(c) => c.kind(),
            Shape::Polyline(pl) => pl.kind(),
            Shape::Polygon(pg) => pg.kind(),
        }
    }
}

/// Polylines are open and never enclose anything.
impl Encloses<Point> for Shape {
    fn encloses(&self, point: &Point) -> bool {
        match self {
            Shape::Circle(c) => c.encloses(point),
            Shape::Polyline(_) => false,
            Shape::Polygon(pg) => pg.encloses(point),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polyline> for Shape {
    fn from(pl: Polyline) -> Self {
        Shape::Polyline(pl)
    }
}

impl From<Polygon> for Shape {
    fn from(pg: Polygon) -> Self {
        Shape::Polygon(pg)
    }
}
