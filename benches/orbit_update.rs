use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;

use constellation::camera::Camera;
use constellation::scene::{HoverTint, OrbitLayout, WordCloud};

fn tint() -> HoverTint {
    HoverTint {
        base: [0.54, 0.52, 0.47],
        highlight: [1.0, 1.0, 1.0],
        rate: 0.1,
    }
}

/// Benchmark: per-frame orbit pass for growing word counts
fn bench_word_cloud_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_cloud_update");

    for &count in &[10usize, 100, 1000] {
        let layout = OrbitLayout::new(count, 40.0, 20.0, 0.02);
        let labels: Vec<String> = (0..count).map(|i| format!("w{}", i)).collect();
        let mut cloud = WordCloud::new(layout, labels, &tint());
        let mut elapsed = 0.0f32;

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                elapsed += 1.0 / 60.0;
                cloud.update(black_box(elapsed), &tint());
            })
        });
    }

    group.finish();
}

/// Benchmark: bounds of the layout, computed once per mount
fn bench_orbit_bounds(c: &mut Criterion) {
    let layout = OrbitLayout::new(10, 40.0, 20.0, 0.02);
    let labels: Vec<String> = (0..10).map(|i| format!("w{}", i)).collect();
    let cloud = WordCloud::new(layout, labels, &tint());

    c.bench_function("orbit_bounds", |b| b.iter(|| black_box(cloud.bounds())));
}

/// Benchmark: projecting every word to the screen, as the billboard pass does
fn bench_project_words(c: &mut Criterion) {
    let mut camera = Camera::new(Vec3::new(0.0, 10.0, 44.0), 90.0, 0.1, 1000.0);
    camera.set_aspect(1280.0, 800.0);
    let layout = OrbitLayout::new(100, 40.0, 20.0, 0.02);
    let viewport = glam::Vec2::new(1280.0, 800.0);

    c.bench_function("project_words", |b| {
        b.iter(|| {
            layout
                .positions(black_box(3.0))
                .filter_map(|p| camera.project(p, viewport))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_word_cloud_update,
    bench_orbit_bounds,
    bench_project_words
);
criterion_main!(benches);
