//! Benchmarks for the escape-time kernel and full frame renders.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::{
    ColourSchemeKind, Complex, DEFAULT_PREVIEW_SCALE, FractalConfig, FractalRenderer,
    MemorySurfaceFactory, escape_count, smooth_escape_count,
};

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");

    // interior point: always runs to the limit
    let interior = Complex::new(-0.1, 0.1);
    // boundary point: escapes after a long orbit
    let boundary = Complex::new(-0.75, 0.05);

    for max_iterations in [100u32, 1000] {
        group.bench_with_input(
            BenchmarkId::new("discrete_interior", max_iterations),
            &max_iterations,
            |b, &max| b.iter(|| escape_count(black_box(interior), max)),
        );
        group.bench_with_input(
            BenchmarkId::new("smooth_boundary", max_iterations),
            &max_iterations,
            |b, &max| b.iter(|| smooth_escape_count(black_box(boundary), max)),
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let renderer = match FractalRenderer::new(&MemorySurfaceFactory::new()) {
        Ok(renderer) => renderer,
        Err(err) => panic!("memory surface is always available: {}", err),
    };

    for (width, height) in [(200u32, 150u32), (800, 600)] {
        let config = FractalConfig {
            width,
            height,
            colour_scheme: ColourSchemeKind::Classic,
            ..FractalConfig::default()
        };

        group.throughput(Throughput::Elements(config.total_pixels()));
        group.bench_with_input(
            BenchmarkId::new("full", format!("{}x{}", width, height)),
            &config,
            |b, config| b.iter(|| renderer.render(black_box(config), |_| {})),
        );
        group.bench_with_input(
            BenchmarkId::new("preview", format!("{}x{}", width, height)),
            &config,
            |b, config| b.iter(|| renderer.render_preview(black_box(config), DEFAULT_PREVIEW_SCALE)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_kernel, bench_render);
criterion_main!(benches);
