// tests/join_map.rs
use std::path::PathBuf;

use oil_map::{
    config::options::{AppOptions, Source},
    pipeline::{self, Outputs},
    progress::Progress,
    stats,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn offline_options(aliases: bool) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.fetch.source = Source::HtmlFile(fixture("oil_table.html"));
    opts.join.map_file = fixture("world_sample.csv");
    if aliases {
        opts.join.aliases_file = Some(fixture("aliases.csv"));
    }
    opts
}

#[derive(Default)]
struct Recorder {
    total: usize,
    stages: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn stage_done(&mut self, stage: &str) { self.stages.push(stage.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

fn run(aliases: bool) -> Outputs {
    pipeline::run(&offline_options(aliases), None).unwrap()
}

#[test]
fn joined_rows_equal_map_rows() {
    let out = run(false);
    assert_eq!(out.joined.len(), 80);
    // polygon order survives the join
    let orders: Vec<u32> = out.joined.iter().map(|j| j.point.order).collect();
    assert_eq!(orders, (1..=80).collect::<Vec<u32>>());
}

#[test]
fn known_mismatches_stay_unmatched_without_aliases() {
    let out = run(false);
    for name in [
        "United States[6]",
        "United Kingdom",
        "Congo, Republic of the",
        "Sudan and South Sudan",
        "Trinidad and Tobago",
        "Congo, Democratic Republic of the",
    ] {
        assert!(out.report.unmatched_records.iter().any(|n| n == name), "{name} should be unmatched");
    }
    let usa = out.joined.iter().find(|j| j.point.region == "USA").unwrap();
    assert_eq!(usa.record, None);

    // both Norway polygons pick up the record
    let norway: Vec<_> = out.joined.iter().filter(|j| j.point.region == "Norway").collect();
    assert_eq!(norway.len(), 10);
    assert!(norway.iter().all(|j| j.oil_bbl_per_day() == Some(1_600_000)));

    // every group of an unmatched region stays null
    let greenland: Vec<_> = out.joined.iter().filter(|j| j.point.region == "Greenland").collect();
    let mut groups: Vec<u32> = greenland.iter().map(|j| j.point.group).collect();
    groups.dedup();
    assert_eq!(groups, [15, 16]);
    assert_eq!(greenland.len(), 10);
    assert!(greenland.iter().all(|j| j.record.is_none()));
}

#[test]
fn aliases_fix_the_renamed_countries() {
    let out = run(true);
    let usa = out.joined.iter().find(|j| j.point.region == "USA").unwrap();
    assert_eq!(usa.oil_bbl_per_day(), Some(12_315_000));
    assert_eq!(
        out.report.unmatched_regions,
        vec!["Greenland", "South Sudan", "Sudan", "Tobago", "Trinidad"]
    );
    assert!(!out.report.unmatched_records.iter().any(|n| n == "United Kingdom"));
}

#[test]
fn progress_sees_every_stage() {
    let mut rec = Recorder::default();
    pipeline::run(&offline_options(false), Some(&mut rec)).unwrap();
    assert_eq!(rec.total, pipeline::STAGES.len());
    assert_eq!(rec.stages, pipeline::STAGES);
    assert!(rec.finished);
}

#[test]
fn missing_map_file_fails_the_map_stage() {
    let mut opts = offline_options(false);
    opts.join.map_file = fixture("no_such_world.csv");
    let mut rec = Recorder::default();
    let err = pipeline::run(&opts, Some(&mut rec)).unwrap_err();
    assert!(err.to_string().starts_with("map:"));
    assert_eq!(rec.stages, ["fetch", "clean"]);
    assert!(rec.finished);
}

#[test]
fn split_means_include_world_row() {
    let out = run(false);
    let split = stats::split_means(&out.records, 822_675);
    assert_eq!(split.above.count, 16);
    assert_eq!(split.above.mean, Some(138_151_383.0 / 16.0));
    assert_eq!(split.below.count, 7);
    assert_eq!(split.below.mean, Some(1_494_453.0 / 7.0));
}

// Totals of the 2019 table: 23 values above the cut (World included), 25 below.
#[test]
fn split_means_reproduce_2019_totals() {
    let mut opts = offline_options(false);
    opts.fetch.source = Source::HtmlFile(fixture("oil_table_2019_totals.html"));
    let out = pipeline::run(&opts, None).unwrap();
    let split = stats::split_means(&out.records, 822_675);
    assert_eq!(split.above.count, 23);
    assert_eq!(split.above.mean, Some(6_518_342.0));
    assert_eq!(split.below.count, 25);
    assert!((split.below.mean.unwrap() - 96_581.08).abs() < 1e-6);
}
