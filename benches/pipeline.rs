// benches/pipeline.rs
use std::path::PathBuf;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use oil_map::{
    clean,
    config::options::{AppOptions, CleanOptions, RenderOptions, Source},
    join::{self, AliasTable},
    map_data, pipeline,
    progress::NullProgress,
    render::{Gradient, raster},
    specs::production,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = std::fs::read_to_string(fixture("oil_table.html")).expect("read oil_table.html");
    let points = map_data::load(&fixture("world_sample.csv")).expect("load world_sample.csv");
    let opts = CleanOptions::default();

    c.bench_function("extract_and_clean", |b| {
        b.iter(|| {
            let table = production::extract(black_box(&doc), 0).unwrap();
            let recs = clean::clean(&table, &opts).unwrap();
            black_box(recs.len())
        })
    });

    let table = production::extract(&doc, 0).unwrap();
    let records = clean::clean(&table, &opts).unwrap();
    let joined = join::left_join(&points, &records, &AliasTable::new());
    let render = RenderOptions::default();
    let gradient = Gradient::from_options(&render).unwrap();

    c.bench_function("rasterize_map", |b| {
        b.iter(|| {
            let img = raster::render_map(black_box(&joined.points), &gradient, &render).unwrap();
            black_box(img.width())
        })
    });
}

fn bench_full_run(c: &mut Criterion) {
    let mut opts = AppOptions::default();
    opts.fetch.source = Source::HtmlFile(fixture("oil_table.html"));
    opts.join.map_file = fixture("world_sample.csv");

    c.bench_function("full_run", |b| {
        b.iter(|| {
            let out = pipeline::run(black_box(&opts), Some(&mut NullProgress)).unwrap();
            black_box(out.joined.len())
        })
    });
}

criterion_group!(benches, bench_pipeline, bench_full_run);
criterion_main!(benches);
