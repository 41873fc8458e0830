use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geospatial::containment::ray_cast;
use geospatial::distance::distance;
use geospatial::geometry::geo_enums::DistanceUnit;
use geospatial::geometry::primitives::{Point, Vector2};

criterion_main!(benches);
criterion_group!(benches, distance_bench, containment_bench);

const N_VERTICES: [usize; 3] = [4, 64, 1024];

fn distance_bench(c: &mut Criterion) {
    let sofia = Point::new(42.6977, 23.3219);
    let sydney = Point::new(-33.8688, 151.2093);

    let mut group = c.benchmark_group("distance");
    for unit in DistanceUnit::ALL {
        group.bench_function(BenchmarkId::from_parameter(unit), |b| {
            b.iter(|| distance(black_box(&sofia), black_box(&sydney), unit))
        });
    }
    group.finish();
}

/// Regular polygon with `n` vertices around (0, 0)
fn regular_polygon(n: usize) -> Vec<Vector2> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            Vector2(10.0 * angle.cos(), 10.0 * angle.sin())
        })
        .collect()
}

fn containment_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ray_cast");
    for n in N_VERTICES {
        let polygon = regular_polygon(n);
        group.throughput(criterion::Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| ray_cast(black_box(Vector2(1.0, 2.0)), black_box(&polygon)))
        });
    }
    group.finish();
}
