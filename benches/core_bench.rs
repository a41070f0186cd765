use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use quad_bezier_editor::{sample, tessellate, ControlSet, CurveModel, DragTarget, SampleCount};
use std::hint::black_box;

fn demo_controls() -> ControlSet {
    ControlSet::new(
        Vec2::new(50.0, 50.0),
        Vec2::new(250.0, 250.0),
        Vec2::new(150.0, 20.0),
    )
}

fn bench_sampling(c: &mut Criterion) {
    let controls = demo_controls();
    let mut group = c.benchmark_group("curve_sample");

    for count in [100_usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let polyline = sample(black_box(&controls), SampleCount::new(count));
                black_box(polyline.len())
            })
        });
    }

    group.finish();
}

fn bench_tessellation(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_tessellate");

    for count in [100_usize, 1_000, 10_000] {
        let polyline = sample(&demo_controls(), SampleCount::new(count));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &polyline,
            |b, polyline| {
                b.iter(|| {
                    let segments = tessellate(black_box(polyline), 5.0);
                    black_box(segments.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_drag_frame(c: &mut Criterion) {
    let mut curve = CurveModel::new(demo_controls(), SampleCount::new(100));
    let mut step = 0_u32;

    c.bench_function("curve_drag_frame_100", |b| {
        b.iter(|| {
            step = step.wrapping_add(1);
            let pos = Vec2::new(150.0, (step % 300) as f32);
            curve.set_point(DragTarget::Control, black_box(pos));
            curve.refresh();
            black_box(curve.polyline().len())
        })
    });
}

criterion_group!(benches, bench_sampling, bench_tessellation, bench_drag_frame);
criterion_main!(benches);
