use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratiotable::{cross_section_options, design_ratio_table, CellValue, RawRecord, ViewOptions};

/// Build `size` records spread over a handful of cross-sections, the
/// shape a pasted STAAD export takes.
fn sample_records(size: usize) -> Vec<RawRecord> {
    let sections = ["W12x26", "W14x30", "W16x40", "W8x10", "HSS6x6"];

    (0..size)
        .map(|i| {
            let mut r = RawRecord::new();
            r.insert("col_beam".to_string(), CellValue::from(format!("B{}", i)));
            r.insert(
                "col_design_property".to_string(),
                CellValue::from(sections[i % sections.len()]),
            );
            r.insert(
                "col_normalized_ratio".to_string(),
                CellValue::from((i % 140) as f64 / 100.0),
            );
            r.insert("col_load_case".to_string(), CellValue::from("101"));
            r
        })
        .collect()
}

fn bench_render_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_flat");

    for size in [100, 1000, 10000].iter() {
        let records = sample_records(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| design_ratio_table(black_box(&records), &ViewOptions::default()));
        });
    }
    group.finish();
}

fn bench_render_grouped(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_grouped");

    for size in [100, 1000, 10000].iter() {
        let records = sample_records(*size);
        let options = ViewOptions::grouped();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| design_ratio_table(black_box(&records), &options));
        });
    }
    group.finish();
}

fn bench_cross_section_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_section_options");

    for size in [100, 1000, 10000].iter() {
        let records = sample_records(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| cross_section_options(black_box(&records)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_render_flat,
    bench_render_grouped,
    bench_cross_section_options
);
criterion_main!(benches);
