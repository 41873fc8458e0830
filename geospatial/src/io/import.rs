use anyhow::{Context, Result, bail, ensure};
use log::warn;

use crate::geometry::geo_enums::ShapeKind;
use crate::geometry::primitives::{Circle, Point, Polygon, Polyline, Shape};
use crate::io::ext_repr::{ExtPoint, ExtShape};

pub fn import_point(ext_point: &ExtPoint) -> Result<Point> {
    let ExtPoint {
        latitude,
        longitude,
    } = *ext_point;
    ensure!(
        latitude.is_finite() && longitude.is_finite(),
        "non-finite coordinates: {ext_point:?}"
    );
    Ok(Point::new(latitude, longitude))
}

pub fn import_shape(ext_shape: &ExtShape) -> Result<Shape> {
    match ext_shape.kind {
        ShapeKind::Circle => {
            if !ext_shape.points.is_empty() {
                warn!(
                    "circle with {} boundary points, ignoring them",
                    ext_shape.points.len()
                );
            }
            let Some(center) = ext_shape.center.as_ref() else {
                bail!("circle without center")
            };
            let Some(radius) = ext_shape.radius else {
                bail!("circle without radius")
            };
            ensure!(
                radius.is_finite() && radius >= 0.0,
                "invalid circle radius: {radius}"
            );
            let center = import_point(center).context("invalid circle center")?;
            let unit = ext_shape.unit.unwrap_or_default();
            Ok(Shape::Circle(Circle::new(center, radius, unit)))
        }
        ShapeKind::Polyline => {
            warn_unused_circle_fields(ext_shape);
            let points = import_points(&ext_shape.points)?;
            if points.len() < 2 {
                warn!("polyline with only {} points", points.len());
            }
            Ok(Shape::Polyline(Polyline::new(points)))
        }
        ShapeKind::Polygon => {
            warn_unused_circle_fields(ext_shape);
            let points = import_points(&ext_shape.points)?;
            let polygon = Polygon::new(points);
            if !polygon.is_valid() {
                warn!(
                    "polygon with only {} points, it will not enclose anything",
                    polygon.number_of_points()
                );
            }
            Ok(Shape::Polygon(polygon))
        }
    }
}

pub fn import_shapes(ext_shapes: &[ExtShape]) -> Result<Vec<Shape>> {
    let mut shapes = Vec::with_capacity(ext_shapes.len());
    for (i, ext_shape) in ext_shapes.iter().enumerate() {
        let shape = import_shape(ext_shape)
            .with_context(|| format!("invalid shape at index {i}"))?;
        shapes.push(shape);
    }
    Ok(shapes)
}

fn import_points(ext_points: &[ExtPoint]) -> Result<Vec<Point>> {
    let mut points = Vec::with_capacity(ext_points.len());
    for (i, ext_point) in ext_points.iter().enumerate() {
        let point = import_point(ext_point)
            .with_context(|| format!("invalid point at index {i}"))?;
        points.push(point);
    }
    Ok(points)
}

fn warn_unused_circle_fields(ext_shape: &ExtShape) {
    if ext_shape.center.is_some() || ext_shape.radius.is_some() {
        warn!(
            "{:?} with a center or radius, ignoring them",
            ext_shape.kind
        );
    }
}
