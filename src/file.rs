// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    clean::{ProductionRecord, RECORD_HEADERS},
    config::{
        consts::NA,
        options::{AppOptions, ExportFormat, ExportOptions, RenderOptions},
    },
    csv::{to_export_string, write_row},
    join::{JOINED_HEADERS, JoinedPoint},
    pipeline::Outputs,
    render::{Gradient, raster, svg},
};

/// Export according to `opts.export`: map formats render the joined points,
/// tabular formats write the cleaned production records.
/// Returns the final path written to.
pub fn export(outputs: &Outputs, opts: &AppOptions) -> Result<PathBuf, Box<dyn Error>> {
    let export = &opts.export;
    let path = export.out_path();
    logf!("Export: Begin format={:?} path={}", export.format, path.display());

    match export.format {
        ExportFormat::Svg | ExportFormat::Png => {
            export_map(&outputs.joined, &opts.render, export.format, &path)?
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            write_records(&path, &outputs.records, export)?
        }
    }

    logf!("Export: OK {}", path.display());
    Ok(path)
}

/// Render the choropleth to `path` as SVG (full figure) or PNG (map raster).
pub fn export_map(
    joined: &[JoinedPoint],
    render: &RenderOptions,
    format: ExportFormat,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    ensure_parent(path)?;
    let gradient = Gradient::from_options(render)?;
    match format {
        ExportFormat::Svg => svg::save(&svg::render(joined, &gradient, render), path),
        ExportFormat::Png => raster::save_png(&raster::render_map(joined, &gradient, render)?, path),
        other => Err(format!("Not a map format: {}", other.ext()).into()),
    }
}

/// Cleaned records as CSV/TSV (per `export.format`).
pub fn write_records(
    path: &Path,
    records: &[ProductionRecord],
    export: &ExportOptions,
) -> Result<(), Box<dyn Error>> {
    let sep = export.format.delim().ok_or("Records export needs CSV or TSV")?;
    write_table(path, &RECORD_HEADERS, &records_to_rows(records), export.include_headers, sep)
}

/// Joined map points (one row per polygon vertex) as CSV/TSV.
pub fn write_joined(
    path: &Path,
    joined: &[JoinedPoint],
    include_headers: bool,
    sep: char,
) -> Result<(), Box<dyn Error>> {
    write_table(path, &JOINED_HEADERS, &joined_to_rows(joined), include_headers, sep)
}

/// Ensure parent dir exists; create/truncate file; write header + rows.
pub fn write_table(
    path: &Path,
    headers: &[&str],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> Result<(), Box<dyn Error>> {
    ensure_parent(path)?;
    let file = File::create(path)
        .map_err(|e| format!("Cannot create {}: {}", path.display(), e))?;
    let mut out = BufWriter::new(file);
    if include_headers {
        write_row(&mut out, headers, sep)?;
    }
    for row in rows {
        write_row(&mut out, row.as_slice(), sep)?;
    }
    out.flush()?;
    logd!("File: wrote {} rows → {}", rows.len(), path.display());
    Ok(())
}

/// Clipboard text for the cleaned table. Map formats fall back to TSV.
pub fn records_export_string(records: &[ProductionRecord], export: &ExportOptions) -> String {
    let sep = export.format.delim().unwrap_or('\t');
    to_export_string(&RECORD_HEADERS, &records_to_rows(records), export.include_headers, sep)
}

pub fn records_to_rows(records: &[ProductionRecord]) -> Vec<Vec<String>> {
    records.iter().map(record_cells).collect()
}

pub fn joined_to_rows(joined: &[JoinedPoint]) -> Vec<Vec<String>> {
    joined
        .iter()
        .map(|j| {
            let p = &j.point;
            let mut row = vec![
                p.long.to_string(),
                p.lat.to_string(),
                p.group.to_string(),
                p.order.to_string(),
                p.region.clone(),
                p.subregion.clone().unwrap_or_else(|| s!(NA)),
            ];
            match &j.record {
                Some(r) => {
                    let cells = record_cells(r);
                    row.push(cells[0].clone());
                    row.push(cells[2].clone());
                    row.push(cells[3].clone());
                }
                None => row.extend([s!(NA), s!(NA), s!(NA)]),
            }
            row
        })
        .collect()
}

fn record_cells(r: &ProductionRecord) -> Vec<String> {
    vec![
        opt_cell(r.rank),
        r.country.clone(),
        r.opec_ind.to_string(),
        opt_cell(r.oil_bbl_per_day),
    ]
}

fn opt_cell<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| s!(NA))
}

pub fn ensure_parent(path: &Path) -> Result<(), Box<dyn Error>> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
