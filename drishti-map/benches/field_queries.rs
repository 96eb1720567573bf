//! Benchmark field query performance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use drishti_map::core::Point2D;
use drishti_map::{DrishtiConfig, FieldLayout, FieldMap};

/// Field of `n x n` square obstacles on a regular grid, with a landmark
/// facing +X beside each one.
fn grid_field(n: usize) -> FieldMap {
    let spacing = 60.0;
    let size = spacing * (n as f32 + 1.0);
    let mut layout = FieldLayout::new(Point2D::new(size, size));

    for i in 0..n {
        for j in 0..n {
            let cx = spacing * (i as f32 + 1.0);
            let cy = spacing * (j as f32 + 1.0);
            layout = layout
                .with_rect_obstacle(Point2D::new(cx - 8.0, cy - 8.0), Point2D::new(cx + 8.0, cy + 8.0))
                .with_landmark(Point2D::new(cx + 8.0, cy), 0.0, false);
        }
    }

    let config = DrishtiConfig::default().with_robot_radius(10.0);
    // Layout is generated, so it is always valid
    FieldMap::from_layout(&layout, config).unwrap()
}

fn bench_line_of_sight(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_of_sight");

    for n in [2, 4, 8].iter() {
        let map = grid_field(*n);
        let size = map.bounds().x;
        // Corridor between the first two rows: clear
        let clear = (Point2D::new(15.0, 90.0), Point2D::new(size - 15.0, 90.0));
        // Through the first row: blocked on the first obstacle
        let blocked = (Point2D::new(15.0, 60.0), Point2D::new(size - 15.0, 60.0));

        group.bench_with_input(BenchmarkId::new("clear", n), n, |b, _| {
            b.iter(|| black_box(map.line_of_sight(black_box(clear.0), black_box(clear.1))))
        });
        group.bench_with_input(BenchmarkId::new("blocked", n), n, |b, _| {
            b.iter(|| black_box(map.line_of_sight(black_box(blocked.0), black_box(blocked.1))))
        });
    }

    group.finish();
}

fn bench_nearest_target(c: &mut Criterion) {
    let map = grid_field(8);
    let estimate = Point2D::new(250.0, 245.0);

    c.bench_function("nearest_target_gated_64", |b| {
        b.iter(|| black_box(map.nearest_target(black_box(estimate), black_box(0.05))))
    });

    c.bench_function("nearest_target_by_image_64", |b| {
        b.iter(|| {
            black_box(map.nearest_target_by_image(
                black_box(estimate),
                black_box(Point2D::new(10.0, 2.0)),
            ))
        })
    });
}

fn bench_generate_nodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_nodes");

    for n in [2, 4, 8].iter() {
        let map = grid_field(*n);
        group.bench_with_input(BenchmarkId::from_parameter(n * n), n, |b, _| {
            b.iter(|| black_box(map.generate_nodes()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_line_of_sight,
    bench_nearest_target,
    bench_generate_nodes
);
criterion_main!(benches);
