// src/specs/production.rs
//
// "List of countries by oil production": the first table on the page.
// Expected shape: Rank | Country | Oil production (bbl/day) | Per capita.

use std::{error::Error, fs, path::Path};

use crate::config::options::{FetchOptions, Source};
use crate::core::{html, net};
use crate::data::DataSet;

/// Read the production table from wherever `opts.source` points.
pub fn fetch(opts: &FetchOptions) -> Result<DataSet, Box<dyn Error>> {
    let doc = match &opts.source {
        Source::Url(url) => net::http_get(url, opts)?,
        Source::HtmlFile(path) => read_saved(path)?,
    };
    extract(&doc, opts.table_index)
}

/// Lift the production table out of an HTML document.
pub fn extract(doc: &str, table_index: usize) -> Result<DataSet, Box<dyn Error>> {
    let ds = html::nth_table(doc, table_index)?;
    logf!(
        "Fetch: table #{} rows={} headers={} cols={}",
        table_index,
        ds.row_count(),
        ds.header_count(),
        ds.ncols()
    );
    Ok(ds)
}

fn read_saved(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("Cannot read saved page {}: {}", path.display(), e).into())
}
