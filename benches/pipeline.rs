//! Navigation pipeline benchmarks
//!
//! - Zone mapping at strategic and reactive resolutions
//! - Planner and avoider on prebuilt grids
//! - Median filter preprocessing
//! - Full frame, sequential vs parallel branches
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use drishti::source::{DepthEstimator, Scene, SyntheticDepth, median_filter};
use drishti::{
    DepthMap, NavigationPipeline, PipelineConfig, ReactiveAvoider, StrategicPlanner, ZoneMapper,
    ZoneMapperConfig,
};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Noisy 640x480 frame with a few invalid pixels
fn benchmark_depth(scene: Scene) -> DepthMap {
    let mut source = SyntheticDepth::new(scene)
        .with_noise(0.05)
        .with_dropout(0.01)
        .with_seed(1);
    source.estimate(&0).expect("valid synthetic parameters")
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_zone_mapping(c: &mut Criterion) {
    let depth = benchmark_depth(Scene::Corridor);
    let mut group = c.benchmark_group("zone_mapping");
    group.throughput(Throughput::Elements((depth.width() * depth.height()) as u64));

    for (name, config) in [
        ("strategic", ZoneMapperConfig::strategic()),
        ("reactive", ZoneMapperConfig::reactive()),
    ] {
        let mapper = ZoneMapper::new(config).unwrap();
        group.bench_function(name, |b| b.iter(|| mapper.map(black_box(&depth))));
    }
    group.finish();
}

fn bench_planning(c: &mut Criterion) {
    let depth = benchmark_depth(Scene::ObstacleLeft);
    let strategic_grid = ZoneMapper::new(ZoneMapperConfig::strategic())
        .unwrap()
        .map(&depth);
    let reactive_grid = ZoneMapper::new(ZoneMapperConfig::reactive())
        .unwrap()
        .map(&depth);
    let planner = StrategicPlanner::default();
    let avoider = ReactiveAvoider::default();

    let mut group = c.benchmark_group("planning");
    group.bench_function("strategic_plan", |b| {
        b.iter(|| planner.plan(black_box(&strategic_grid)))
    });
    group.bench_function("reactive_compute", |b| {
        b.iter(|| avoider.compute(black_box(&reactive_grid)))
    });
    group.finish();
}

fn bench_median_filter(c: &mut Criterion) {
    let depth = benchmark_depth(Scene::ObstacleCenter);
    let mut group = c.benchmark_group("median_filter");

    for kernel in [3usize, 5, 7] {
        group.bench_with_input(BenchmarkId::from_parameter(kernel), &kernel, |b, &k| {
            b.iter(|| median_filter(black_box(&depth), k))
        });
    }
    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let depth = benchmark_depth(Scene::LeftHalfBlocked);
    let pipeline = NavigationPipeline::new(PipelineConfig {
        median_kernel: None,
        ..PipelineConfig::default()
    })
    .unwrap();

    let mut group = c.benchmark_group("full_frame");
    group.bench_function("sequential", |b| {
        b.iter(|| pipeline.process(black_box(&depth)))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| pipeline.process_parallel(black_box(&depth)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_zone_mapping,
    bench_planning,
    bench_median_filter,
    bench_full_frame
);
criterion_main!(benches);
