// src/clean.rs
//
// Raw production table → typed records.
// Columns are positional, so the table shape is checked before anything is renamed.

use std::error::Error;

use crate::config::consts::{EXPECTED_COLUMNS, OPEC_ANNOTATION, OPEC_MARKER, THOUSANDS_SEPARATORS};
use crate::config::options::CleanOptions;
use crate::core::sanitize::{collapse_ws_runs, parse_int, remove_first, strip_separators};
use crate::data::DataSet;

/// One cleaned row of the production table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductionRecord {
    /// 1-based; None for aggregate rows ("World production") and header artifacts.
    pub rank: Option<u32>,
    pub country: String,
    /// 1 iff the raw country text carried the OPEC marker.
    pub opec_ind: u8,
    pub oil_bbl_per_day: Option<i64>,
}

pub const RECORD_HEADERS: [&str; 4] = ["rank", "country", "opec_ind", "oil_bbl_per_day"];

/// Positional names given to the four source columns.
const RENAMED: [&str; 4] = ["rank", "country", "oil_bbl_per_day", "prod_per_capita"];

/// Substring each source header must contain (column 0 is free-form).
const HEADER_HINTS: [Option<&str>; 4] = [None, Some("country"), Some("production"), Some("capita")];

/// Intermediate row: all four source columns typed, before the final projection.
#[derive(Clone, Debug, PartialEq, Eq)]
struct StagedRow {
    rank: Option<u32>,
    country: String,
    oil_bbl_per_day: Option<i64>,
    prod_per_capita: Option<i64>,
    opec_ind: u8,
}

impl StagedRow {
    fn into_record(self) -> ProductionRecord {
        ProductionRecord {
            rank: self.rank,
            country: self.country,
            opec_ind: self.opec_ind,
            oil_bbl_per_day: self.oil_bbl_per_day,
        }
    }
}

/// Fail unless every row (and the header) is exactly four columns wide,
/// and, when `strict`, the headers read the way the renaming assumes.
pub fn check_shape(ds: &DataSet, strict: bool) -> Result<(), Box<dyn Error>> {
    if let Some(h) = &ds.headers {
        if h.len() != EXPECTED_COLUMNS {
            return Err(format!(
                "Table shape: header has {} columns, expected {} ({:?})",
                h.len(), EXPECTED_COLUMNS, h
            ).into());
        }
        if strict {
            for (i, hint) in HEADER_HINTS.iter().enumerate() {
                let Some(hint) = hint else { continue };
                if !h[i].to_ascii_lowercase().contains(hint) {
                    return Err(format!(
                        "Table shape: column {} ({}) header {:?} does not mention {:?}",
                        i + 1, RENAMED[i], h[i], hint
                    ).into());
                }
            }
        }
    }

    if let Some((i, row)) = ds.rows.iter().enumerate().find(|(_, r)| r.len() != EXPECTED_COLUMNS) {
        return Err(format!(
            "Table shape: row {} has {} columns, expected {} ({:?})",
            i + 1, row.len(), EXPECTED_COLUMNS, row
        ).into());
    }
    Ok(())
}

/// Shape check, then clean every row.
pub fn clean(ds: &DataSet, opts: &CleanOptions) -> Result<Vec<ProductionRecord>, Box<dyn Error>> {
    check_shape(ds, opts.strict_headers)?;

    let staged: Vec<StagedRow> = ds.rows.iter().map(|r| stage_row(r)).collect();
    let per_capita = staged.iter().filter(|s| s.prod_per_capita.is_some()).count();
    let records: Vec<ProductionRecord> = staged.into_iter().map(StagedRow::into_record).collect();

    let opec = records.iter().filter(|r| r.opec_ind == 1).count();
    let unranked = records.iter().filter(|r| r.rank.is_none()).count();
    let no_value = records.iter().filter(|r| r.oil_bbl_per_day.is_none()).count();
    logf!(
        "Clean: rows={} opec={} unranked={} null_bbl={} per_capita_parsed={}",
        records.len(), opec, unranked, no_value, per_capita
    );
    Ok(records)
}

fn stage_row(row: &[String]) -> StagedRow {
    let raw_country = &row[1];
    StagedRow {
        rank: parse_rank(&row[0]),
        country: clean_country(raw_country),
        oil_bbl_per_day: parse_count(&row[2]),
        prod_per_capita: parse_count(&row[3]),
        opec_ind: opec_flag(raw_country),
    }
}

/// Integer rank; anything else (dashes, header artifacts, negatives) is None.
pub fn parse_rank(cell: &str) -> Option<u32> {
    parse_int(cell).and_then(|v| u32::try_from(v).ok())
}

/// Strip thousands separators, then parse. Malformed text is None.
pub fn parse_count(cell: &str) -> Option<i64> {
    parse_int(&strip_separators(cell, THOUSANDS_SEPARATORS))
}

pub fn opec_flag(raw_country: &str) -> u8 {
    u8::from(raw_country.contains(OPEC_MARKER))
}

/// Drop the first "(OPEC)" annotation and squeeze whitespace runs.
/// Cell edges are left alone; `visible_text` has already trimmed them.
pub fn clean_country(raw_country: &str) -> String {
    let without = remove_first(raw_country, OPEC_ANNOTATION);
    collapse_ws_runs(&without)
}
