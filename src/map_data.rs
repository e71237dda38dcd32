// src/map_data.rs
//
// World polygon points: one row per vertex, grouped into polygons by `group`.
// File order is the drawing order and is never changed.

use std::{error::Error, fs, path::Path};

use crate::csv::{header_index, parse_rows};

#[derive(Clone, Debug, PartialEq)]
pub struct MapPoint {
    pub long: f64,
    pub lat: f64,
    /// Polygon / sub-polygon id
    pub group: u32,
    pub order: u32,
    /// Country/region name as spelled by the polygon dataset
    pub region: String,
    pub subregion: Option<String>,
}

/// Load `long,lat,group,order,region,subregion` points from a CSV file.
pub fn load(path: &Path) -> Result<Vec<MapPoint>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read map data {}: {}", path.display(), e))?;
    let points = parse(&text)?;
    logf!(
        "Map: loaded {} points, {} groups from {}",
        points.len(),
        group_count(&points),
        path.display()
    );
    Ok(points)
}

/// Parse polygon points from CSV text with a header row.
pub fn parse(text: &str) -> Result<Vec<MapPoint>, Box<dyn Error>> {
    let mut rows = parse_rows(text, ',');
    if rows.is_empty() {
        return Err("Map data is empty".into());
    }
    let headers = rows.remove(0);

    let col = |name: &str| -> Result<usize, Box<dyn Error>> {
        header_index(&headers, name).ok_or_else(|| format!("Map data: missing column {name:?}").into())
    };
    let i_long = col("long")?;
    let i_lat = col("lat")?;
    let i_group = col("group")?;
    let i_region = col("region")?;
    let i_order = header_index(&headers, "order");
    let i_sub = header_index(&headers, "subregion");

    let mut out = Vec::with_capacity(rows.len());
    for (n, row) in rows.iter().enumerate() {
        let line = n + 2; // 1-based, after header
        let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");

        let long = parse_f64(cell(i_long), "long", line)?;
        let lat = parse_f64(cell(i_lat), "lat", line)?;
        let group = parse_u32(cell(i_group), "group", line)?;
        let order = match i_order {
            Some(i) => parse_u32(cell(i), "order", line)?,
            None => n as u32 + 1,
        };
        let subregion = i_sub
            .map(cell)
            .filter(|s| !s.is_empty() && *s != "NA")
            .map(String::from);

        out.push(MapPoint {
            long,
            lat,
            group,
            order,
            region: s!(cell(i_region)),
            subregion,
        });
    }
    Ok(out)
}

/// Consecutive runs of points sharing a group id, in file order.
pub fn polygons(points: &[MapPoint]) -> Vec<&[MapPoint]> {
    points.chunk_by(|a, b| a.group == b.group).collect()
}

pub fn group_count(points: &[MapPoint]) -> usize {
    polygons(points).len()
}

fn parse_f64(s: &str, what: &str, line: usize) -> Result<f64, Box<dyn Error>> {
    s.parse::<f64>()
        .map_err(|_| format!("Map data line {line}: bad {what} {s:?}").into())
}

fn parse_u32(s: &str, what: &str, line: usize) -> Result<u32, Box<dyn Error>> {
    s.parse::<u32>()
        .map_err(|_| format!("Map data line {line}: bad {what} {s:?}").into())
}
