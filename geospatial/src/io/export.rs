use crate::geometry::geo_traits::GeoShape;
use crate::geometry::primitives::{Point, Shape};
use crate::io::ext_repr::{ExtPoint, ExtShape};

pub fn export_point(point: &Point) -> ExtPoint {
    ExtPoint {
        latitude: point.latitude(),
        longitude: point.longitude(),
    }
}

/// Exports a [`Shape`] to its external representation,
/// tagged with its [`ShapeKind`](crate::geometry::geo_enums::ShapeKind) code.
pub fn export_shape(shape: &Shape) -> ExtShape {
    let mut ext_shape = ExtShape {
        kind: shape.kind(),
        points: vec![],
        center: None,
        radius: None,
        unit: None,
    };
    match shape {
        Shape::Circle(c) => {
            ext_shape.center = Some(export_point(&c.center));
            ext_shape.radius = Some(c.radius);
            ext_shape.unit = Some(c.unit);
        }
        Shape::Polyline(pl) => ext_shape.points = pl.points.iter().map(export_point).collect(),
        Shape::Polygon(pg) => ext_shape.points = pg.points.iter().map(export_point).collect(),
    }
    ext_shape
}
