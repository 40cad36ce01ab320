use criterion::{criterion_group, criterion_main, Criterion};
use flagdb_core::prelude::*;
use std::hint::black_box;

fn bench_filters(c: &mut Criterion) {
    let catalog = FlagCatalog::bundled().expect("bundled dataset");

    c.bench_function("filter_empty", |b| {
        let criteria = FilterCriteria::default();
        b.iter(|| black_box(catalog.filter(black_box(&criteria))))
    });

    c.bench_function("filter_search", |b| {
        let criteria = FilterCriteria::default().with_search("island");
        b.iter(|| black_box(catalog.filter(black_box(&criteria))))
    });

    c.bench_function("filter_two_colors", |b| {
        let criteria = FilterCriteria::default()
            .with_color("#FFFFFF")
            .with_color("#E53935");
        b.iter(|| black_box(catalog.filter(black_box(&criteria))))
    });

    c.bench_function("filter_everything", |b| {
        let criteria = FilterCriteria::default()
            .with_search("a")
            .with_color("#1E88E5")
            .with_color_count(3)
            .with_continent("Europe");
        b.iter(|| black_box(catalog.filter(black_box(&criteria))))
    });
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_bundled", |b| b.iter(|| black_box(FlagCatalog::bundled())));
}

criterion_group!(benches, bench_filters, bench_load);
criterion_main!(benches);
