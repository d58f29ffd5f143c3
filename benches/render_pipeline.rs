use std::hint::black_box;

use ascii_fractal::{
    generate_fractal, generate_fractal_rayon, generate_text_buffer, MandelbrotConfig,
    MandelbrotDistanceAlgorithm, MandelbrotDistanceRamp,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn setup() -> (MandelbrotConfig, MandelbrotDistanceAlgorithm, MandelbrotDistanceRamp) {
    let config = MandelbrotConfig::default();
    let algorithm = config
        .build_algorithm()
        .expect("default config builds an algorithm");
    let glyph_map = config.build_glyph_map();

    (config, algorithm, glyph_map)
}

fn bench_generate(c: &mut Criterion) {
    let (config, algorithm, _) = setup();
    let grid_rect = config.grid_rect();
    let mut group = c.benchmark_group("generate_fractal");

    group.bench_function(BenchmarkId::new("serial", grid_rect.cell_count()), |b| {
        b.iter(|| generate_fractal(black_box(grid_rect), &algorithm).expect("serial render"))
    });

    group.bench_function(BenchmarkId::new("rayon", grid_rect.cell_count()), |b| {
        b.iter(|| generate_fractal_rayon(black_box(grid_rect), &algorithm).expect("rayon render"))
    });

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let (config, algorithm, glyph_map) = setup();
    let grid_rect = config.grid_rect();

    c.bench_function("render_pipeline/rayon_to_text", |b| {
        b.iter(|| {
            let samples = generate_fractal_rayon(grid_rect, &algorithm).expect("rayon render");
            let buffer =
                generate_text_buffer(samples, &glyph_map, grid_rect).expect("glyph mapping");
            black_box(buffer.to_string())
        })
    });
}

criterion_group!(benches, bench_generate, bench_full_pipeline);
criterion_main!(benches);
