// tests/clean_table.rs
use std::{fs, path::PathBuf};

use oil_map::{
    clean::{self, ProductionRecord},
    config::{
        consts::THOUSANDS_SEPARATORS,
        options::{CleanOptions, FetchOptions, Source},
    },
    core::sanitize::strip_separators,
    specs::production,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn records() -> Vec<ProductionRecord> {
    let opts = FetchOptions {
        source: Source::HtmlFile(fixture("oil_table.html")),
        ..FetchOptions::default()
    };
    let table = production::fetch(&opts).unwrap();
    clean::clean(&table, &CleanOptions::default()).unwrap()
}

const OPEC_2019: [&str; 14] = [
    "Algeria", "Angola", "Congo, Republic of the", "Ecuador", "Equatorial Guinea", "Gabon", "Iran",
    "Iraq", "Kuwait", "Libya", "Nigeria", "Saudi Arabia", "United Arab Emirates", "Venezuela",
];

#[test]
fn opec_flag_matches_membership() {
    let recs = records();
    let mut opec: Vec<&str> = recs.iter().filter(|r| r.opec_ind == 1).map(|r| r.country.as_str()).collect();
    opec.sort_unstable();
    assert_eq!(opec, OPEC_2019);
    assert!(recs.iter().all(|r| !r.country.contains("(OPEC)")));
}

#[test]
fn only_the_world_row_is_unranked() {
    let recs = records();
    let unranked: Vec<&ProductionRecord> = recs.iter().filter(|r| r.rank.is_none()).collect();
    assert_eq!(unranked.len(), 1);
    assert_eq!(unranked[0].country, "World production");
    assert_eq!(unranked[0].oil_bbl_per_day, Some(80_622_000));
}

#[test]
fn numbers_and_names_come_through_clean() {
    let recs = records();
    let us = &recs[1];
    assert_eq!(us.rank, Some(1));
    assert_eq!(us.country, "United States[6]");
    assert_eq!(us.oil_bbl_per_day, Some(12_315_000));

    let chad = recs.iter().find(|r| r.country == "Chad").unwrap();
    assert_eq!(chad.rank, Some(23));
    assert_eq!(chad.oil_bbl_per_day, None);
}

#[test]
fn separator_stripping_is_idempotent() {
    for raw in ["12,315,000", "1\u{a0}600\u{a0}000", "939\u{202f}760", "n/a", ""] {
        let once = strip_separators(raw, THOUSANDS_SEPARATORS);
        assert_eq!(strip_separators(&once, THOUSANDS_SEPARATORS), once);
    }
}

#[test]
fn wrong_shape_page_is_rejected() {
    let doc = fs::read_to_string(fixture("oil_table.html")).unwrap();
    // table #1 is the navbox: one column wide
    let navbox = production::extract(&doc, 1).unwrap();
    let err = clean::clean(&navbox, &CleanOptions { strict_headers: false }).unwrap_err();
    assert!(err.to_string().contains("expected 4"));
}
