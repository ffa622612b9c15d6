//! Benchmarks for cell classification, vertex generation and the grid pass.
//!
//! Run with: cargo bench --bench contour_benchmarks

use cell_contours::{
    do_concurrent, generate_contours, get_code, get_vertices, CodeParams, ContourConfig,
    ContourType, Grid, Point, Threshold, VertexParams,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate a smooth temperature-like field with hills and valleys.
fn generate_smooth_field(width: usize, height: usize) -> Vec<f64> {
    let mut data = vec![0.0; width * height];

    for y in 0..height {
        for x in 0..width {
            let fx = x as f64 / width as f64;
            let fy = y as f64 / height as f64;

            let v1 = (fx * std::f64::consts::PI * 4.0).sin() * 20.0;
            let v2 = (fy * std::f64::consts::PI * 4.0).sin() * 20.0;
            let v3 = ((fx + fy) * std::f64::consts::PI * 2.0).sin() * 10.0;

            data[y * width + x] = 50.0 + v1 + v2 + v3;
        }
    }
    data
}

fn line_thresholds() -> Vec<Threshold> {
    (1..10).map(|i| Threshold::line(i as f64 * 10.0)).collect()
}

fn band_thresholds() -> Vec<Threshold> {
    (0..9)
        .map(|i| Threshold::band(i as f64 * 10.0, (i + 1) as f64 * 10.0))
        .collect()
}

// =============================================================================
// PER-CELL KERNEL BENCHMARKS
// =============================================================================

fn bench_get_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_code");
    let (width, height) = (256, 256);
    let data = generate_smooth_field(width, height);
    let cells = ((width - 1) * (height - 1)) as u64;
    group.throughput(Throughput::Elements(cells));

    for (name, threshold) in [
        ("iso_lines", Threshold::line(50.0)),
        ("iso_bands", Threshold::band(40.0, 60.0)),
    ] {
        group.bench_with_input(BenchmarkId::new("grid", name), &threshold, |b, &threshold| {
            b.iter(|| {
                let mut acc = 0u64;
                for y in 0..height - 1 {
                    for x in 0..width - 1 {
                        let code = get_code(&CodeParams {
                            cell_weights: black_box(&data),
                            threshold,
                            x,
                            y,
                            width,
                            height,
                        });
                        acc += u64::from(code.code);
                    }
                }
                acc
            });
        });
    }

    group.finish();
}

fn bench_get_vertices(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_vertices");
    let origin = Point::new(0.0, 0.0);

    group.bench_function("all_line_codes", |b| {
        b.iter(|| {
            for code in 0..16u8 {
                for mean_code in 0..2 {
                    let params =
                        VertexParams::new(origin, [1.0, 1.0], 3, 7, code, ContourType::IsoLines)
                            .with_mean_code(mean_code);
                    black_box(get_vertices(black_box(&params)));
                }
            }
        });
    });

    group.bench_function("all_band_codes", |b| {
        b.iter(|| {
            for code in 0..=170u8 {
                for mean_code in 0..3 {
                    let params =
                        VertexParams::new(origin, [1.0, 1.0], 3, 7, code, ContourType::IsoBands)
                            .with_mean_code(mean_code);
                    black_box(get_vertices(black_box(&params)));
                }
            }
        });
    });

    group.finish();
}

// =============================================================================
// GRID PASS BENCHMARKS
// =============================================================================

fn bench_grid_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_pass");
    group.sample_size(20);

    for size in [128usize, 512] {
        let data = generate_smooth_field(size, size);
        let Ok(grid) = Grid::new(&data, size, size) else {
            continue;
        };
        group.throughput(Throughput::Elements((size * size) as u64));

        for (name, thresholds) in [("lines", line_thresholds()), ("bands", band_thresholds())] {
            let config = ContourConfig::default().with_thresholds(thresholds);

            group.bench_with_input(
                BenchmarkId::new(format!("sequential_{}", name), size),
                &config,
                |b, config| b.iter(|| generate_contours(black_box(&grid), config)),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("concurrent_{}", name), size),
                &config,
                |b, config| b.iter(|| do_concurrent(black_box(&grid), config)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_get_code, bench_get_vertices, bench_grid_pass);
criterion_main!(benches);
