use log::debug;

use crate::GeoError;
use crate::geometry::primitives::{Point, Vector2};

/// Checks whether `point` lies inside the polygon described by `polygon`.
///
/// The polygon is implicitly closed: the last point connects back to the first one.
/// Results for points exactly on an edge or vertex are undefined.
/// Polygons with fewer than three points enclose nothing.
///
/// Fails with [`GeoError::InvalidArgument`] if no polygon is given.
pub fn is_point_in_polygon(point: &Point, polygon: Option<&[Point]>) -> Result<bool, GeoError> {
    let polygon = polygon.ok_or(GeoError::InvalidArgument("polygon"))?;
    let vertices = polygon.iter().map(Point::to_vector).collect::<Vec<_>>();
    Ok(ray_cast(point.to_vector(), &vertices))
}

/// Planar counterpart of [`is_point_in_polygon`].
pub fn is_vector_in_polygon(point: Vector2, polygon: Option<&[Vector2]>) -> Result<bool, GeoError> {
    let polygon = polygon.ok_or(GeoError::InvalidArgument("polygon"))?;
    Ok(ray_cast(point, polygon))
}

/// Ray casting parity test: a horizontal ray is shot from `point` towards positive x
/// and every edge it crosses toggles the result.
///
/// <https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm>
pub fn ray_cast(point: Vector2, polygon: &[Vector2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    if polygon.len() < 3 {
        debug!(
            "point-in-polygon test on a degenerate polygon ({} points)",
            polygon.len()
        );
    }

    let Vector2(p_x, p_y) = point;
    let mut inside = false;
    let Vector2(mut e_x, mut e_y) = last;
    for &Vector2(x, y) in polygon {
        let (s_x, s_y) = (e_x, e_y);
        (e_x, e_y) = (x, y);
        // the division only happens once the edge straddles p_y, so s_y != e_y
        if ((e_y > p_y) != (s_y > p_y)) && (p_x - e_x) < (p_y - e_y) * (s_x - e_x) / (s_y - e_y) {
            inside = !inside;
        }
    }
    inside
}
