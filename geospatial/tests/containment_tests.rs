#[cfg(test)]
mod tests {
    use test_case::test_case;

    use geospatial::GeoError;
    use geospatial::containment::{is_point_in_polygon, is_vector_in_polygon, ray_cast};
    use geospatial::geometry::geo_traits::Encloses;
    use geospatial::geometry::primitives::{Point, Polygon, Vector2};

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn square() -> Vec<Point> {
        points(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
    }

    /// U shape opening towards positive latitude,
    /// the notch spans latitudes 3..10 and longitudes 3..7
    fn u_shape() -> Vec<Point> {
        points(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 3.0),
            (3.0, 3.0),
            (3.0, 7.0),
            (10.0, 7.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ])
    }

    fn contains(polygon: &[Point], lat: f64, lon: f64) -> bool {
        let point = Point::new(lat, lon);
        is_point_in_polygon(&point, Some(polygon)).unwrap()
    }

    #[test_case(5.0, 5.0, true; "center")]
    #[test_case(15.0, 15.0, false; "beyond the far corner")]
    #[test_case(-5.0, 5.0, false; "left of the square")]
    #[test_case(5.0, -0.5, false; "below the square")]
    #[test_case(9.99, 0.01, true; "near a corner")]
    fn square_containment(lat: f64, lon: f64, expected: bool) {
        assert_eq!(contains(&square(), lat, lon), expected);
    }

    #[test]
    fn boundary_points_do_not_fail() {
        let square = square();
        let boundary = [
            (0.0, 5.0),
            (10.0, 5.0),
            (5.0, 0.0),
            (5.0, 10.0),
            (0.0, 0.0),
            (10.0, 10.0),
        ];
        for p in boundary {
            let result = is_point_in_polygon(&Point::from(p), Some(square.as_slice()));
            assert!(result.is_ok());
        }
    }

    #[test]
    fn absent_polygon_is_an_invalid_argument() {
        let result = is_point_in_polygon(&Point::new(5.0, 5.0), None);
        assert!(matches!(result, Err(GeoError::InvalidArgument(_))));

        let result = is_vector_in_polygon(Vector2(5.0, 5.0), None);
        assert!(matches!(result, Err(GeoError::InvalidArgument(_))));
    }

    #[test_case(1.0, 5.0, true; "base of the u")]
    #[test_case(6.0, 1.0, true; "lower arm")]
    #[test_case(6.0, 9.0, true; "upper arm")]
    #[test_case(6.0, 5.0, false; "inside the notch")]
    #[test_case(11.0, 5.0, false; "past the opening")]
    fn concave_polygon(lat: f64, lon: f64, expected: bool) {
        assert_eq!(contains(&u_shape(), lat, lon), expected);
    }

    #[test]
    fn winding_order_does_not_matter() {
        let square = square();
        let mut reversed = square.clone();
        reversed.reverse();
        for (lat, lon) in [(5.0, 5.0), (15.0, 15.0), (-5.0, 5.0), (2.0, 8.0)] {
            assert_eq!(contains(&square, lat, lon), contains(&reversed, lat, lon));
        }
    }

    #[test_case(&[]; "no points")]
    #[test_case(&[(3.0, 3.0)]; "single point")]
    #[test_case(&[(0.0, 0.0), (10.0, 10.0)]; "two points")]
    #[test_case(&[(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]; "collinear points")]
    fn degenerate_polygons_enclose_nothing(coords: &[(f64, f64)]) {
        let polygon = points(coords);
        // both query points lie off the line through the degenerate polygons
        for (lat, lon) in [(1.0, 5.0), (5.0, 1.0)] {
            assert!(!contains(&polygon, lat, lon));
        }
    }

    #[test]
    fn vector_overload_matches_point_overload() {
        let u = u_shape();
        let vectors = u.iter().map(Point::to_vector).collect::<Vec<_>>();
        for p in [(1.0, 5.0), (6.0, 5.0), (6.0, 1.0), (20.0, 20.0)] {
            let p = Point::from(p);
            let v = p.to_vector();
            assert_eq!(
                is_point_in_polygon(&p, Some(u.as_slice())).unwrap(),
                is_vector_in_polygon(v, Some(vectors.as_slice())).unwrap()
            );
        }
    }

    #[test]
    fn polygon_encloses_matches_engine() {
        let polygon = Polygon::new(u_shape());
        for (lat, lon) in [(1.0, 5.0), (6.0, 5.0), (6.0, 1.0), (20.0, 20.0)] {
            let p = Point::new(lat, lon);
            assert_eq!(polygon.encloses(&p), contains(&polygon.points, lat, lon));
        }
    }

    #[test]
    fn geographic_polygon() {
        // rough outline around Bulgaria
        let outline = points(&[(41.2, 22.3), (44.2, 22.3), (44.2, 28.6), (41.2, 28.6)]);
        let polygon = Polygon::new(outline);
        let sofia = Point::new(42.6977, 23.3219);
        let bucharest = Point::new(44.4268, 26.1025);
        let athens = Point::new(37.9838, 23.7275);

        assert!(polygon.encloses(&sofia));
        assert!(!polygon.encloses(&bucharest));
        assert!(!polygon.encloses(&athens));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let u = u_shape();
        let first = contains(&u, 6.0, 1.0);
        for _ in 0..100 {
            assert_eq!(contains(&u, 6.0, 1.0), first);
        }
    }

    #[test]
    fn single_precision_projection_is_opt_in() {
        let p = Point::new(0.1, 0.2);
        assert_eq!(p.to_vector(), Vector2(0.1, 0.2));

        let narrowed = p.to_vector().to_single_precision();
        assert_ne!(narrowed, p.to_vector());
        assert_eq!(narrowed, Vector2(0.1f32 as f64, 0.2f32 as f64));
    }

    #[test]
    fn single_precision_moves_points_onto_the_boundary() {
        // lower edge at longitude 0.1, the query point lies just below it
        let polygon = points(&[(0.0, 0.1), (0.0, 10.0), (10.0, 10.0), (10.0, 0.1)]);
        let p = Point::new(5.0, 0.1 - 1e-10);

        // both longitudes round to the same f32
        let narrowed = p.to_vector().to_single_precision();
        let edge = Vector2(0.0, 0.1).to_single_precision();
        assert_eq!(narrowed.y(), edge.y());

        let vertices = polygon.iter().map(Point::to_vector).collect::<Vec<_>>();
        let narrowed_vertices = vertices
            .iter()
            .map(|v| v.to_single_precision())
            .collect::<Vec<_>>();

        assert!(!contains(&polygon, 5.0, 0.1 - 1e-10));
        assert!(!ray_cast(p.to_vector(), &vertices));
        assert!(ray_cast(narrowed, &narrowed_vertices));
    }
}
