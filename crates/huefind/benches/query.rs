use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huefind::opt::Options;
use huefind::{Catalog, ColorInput, Rgb};

/// A deterministic spread of colors across the RGB cube.
fn queries() -> Vec<Rgb> {
    (0..256_u32)
        .map(|n| {
            let m = n.wrapping_mul(2_654_435_761);
            Rgb::new((m >> 8) as u8, (m >> 16) as u8, (m >> 24) as u8)
        })
        .collect()
}

/// A catalog with one color per step of the RGB grid.
fn grid_entries(step: usize) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for r in (0..256).step_by(step) {
        for g in (0..256).step_by(step) {
            for b in (0..256).step_by(step) {
                let hex = Rgb::new(r as u8, g as u8, b as u8).to_hex();
                entries.push((hex.as_str().to_string(), format!("Grid {}", hex)));
            }
        }
    }
    entries
}

pub fn run_benchmarks(c: &mut Criterion) {
    let options = Options::default();
    let entries = grid_entries(17);
    let queries = queries();

    let mut group = c.benchmark_group("catalog-build");
    group.sample_size(10);
    group.bench_function("builtin", |b| b.iter(Catalog::builtin));
    group.bench_function("grid", |b| {
        b.iter(|| Catalog::new(black_box(&entries).iter().cloned(), &options))
    });
    group.finish();

    let catalog = Catalog::new(entries.iter().cloned(), &options)
        .expect("grid catalog should have valid colors");
    let labs: Vec<_> = queries.iter().map(Rgb::to_lab).collect();

    let mut group = c.benchmark_group("nearest");
    group.bench_function("tree", |b| {
        b.iter(|| {
            for lab in &labs {
                black_box(catalog.nearest(lab));
            }
        })
    });
    group.bench_function("exhaustive", |b| {
        b.iter(|| {
            for lab in &labs {
                black_box(catalog.nearest_exhaustive(lab));
            }
        })
    });
    group.finish();

    let inputs: Vec<ColorInput> = queries.iter().copied().map(ColorInput::from).collect();
    let mut group = c.benchmark_group("get");
    group.bench_function("rgb", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(catalog.get(input));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
