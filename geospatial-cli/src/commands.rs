use geospatial::containment::ray_cast;
use geospatial::distance::distance as great_circle_distance;
use geospatial::geometry::geo_enums::DistanceUnit;
use geospatial::geometry::geo_traits::{Encloses, GeoShape};
use geospatial::geometry::primitives::{Point, Polygon, Shape};
use log::{debug, warn};

use crate::config::CliConfig;
use crate::io::output::{ContainsOutput, DistanceOutput, Measure, ShapeSummary};

pub fn distance(from: Point, to: Point, unit: DistanceUnit) -> DistanceOutput {
    let distance = great_circle_distance(&from, &to, unit);
    debug!("distance {from} -> {to}: {distance} {unit}");
    DistanceOutput {
        from,
        to,
        distance,
        unit: unit.to_string(),
    }
}

pub fn contains(point: Point, shape: &Shape, config: &CliConfig) -> ContainsOutput {
    let inside = match shape {
        Shape::Polygon(polygon) if config.single_precision_projection => {
            polygon_encloses_narrowed(polygon, &point)
        }
        Shape::Polyline(_) => {
            warn!("polylines are open and enclose nothing");
            false
        }
        _ => shape.encloses(&point),
    };
    ContainsOutput {
        point,
        kind: shape.kind(),
        inside,
    }
}

pub fn inspect(shapes: &[Shape], unit: DistanceUnit) -> Vec<ShapeSummary> {
    shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| {
            let (n_points, measure, value) = match shape {
                Shape::Circle(c) => (1, Measure::Radius, c.radius_in(unit)),
                Shape::Polyline(pl) => (pl.number_of_points(), Measure::Length, pl.length(unit)),
                Shape::Polygon(pg) => (
                    pg.number_of_points(),
                    Measure::Perimeter,
                    pg.perimeter(unit),
                ),
            };
            ShapeSummary {
                index,
                kind: shape.kind(),
                n_points,
                measure,
                value,
                unit: unit.to_string(),
            }
        })
        .collect()
}

fn polygon_encloses_narrowed(polygon: &Polygon, point: &Point) -> bool {
    let vertices = polygon
        .vertices()
        .into_iter()
        .map(|v| v.to_single_precision())
        .collect::<Vec<_>>();
    ray_cast(point.to_vector().to_single_precision(), &vertices)
}
