// src/join.rs
//
// Left join driven from the polygon side: every map point survives, each one
// carrying the production record whose country equals its region (or nothing).
// Records without polygons fall out of the result and are reported instead.

use std::{
    collections::{BTreeSet, HashMap},
    error::Error,
    fs,
    path::Path,
};

use crate::clean::ProductionRecord;
use crate::csv::parse_rows;
use crate::map_data::MapPoint;

/// Optional `{source name -> region name}` renames applied to records before joining.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliasTable {
    map: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: impl Into<String>, region: impl Into<String>) {
        self.map.insert(source.into(), region.into());
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Region name to look up for a record's country.
    pub fn resolve<'a>(&'a self, country: &'a str) -> &'a str {
        self.map.get(country).map(|s| s.as_str()).unwrap_or(country)
    }

    /// Two-column CSV `source,region`; a first row of `source,region` is skipped.
    pub fn parse(text: &str) -> Result<Self, Box<dyn Error>> {
        let mut table = Self::new();
        for (n, row) in parse_rows(text, ',').into_iter().enumerate() {
            if row.len() != 2 {
                return Err(format!("Aliases line {}: expected 2 columns, got {}", n + 1, row.len()).into());
            }
            if n == 0 && row[0].eq_ignore_ascii_case("source") && row[1].eq_ignore_ascii_case("region") {
                continue;
            }
            table.insert(row[0].trim(), row[1].trim());
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read aliases {}: {}", path.display(), e))?;
        let table = Self::parse(&text)?;
        logf!("Join: {} aliases from {}", table.len(), path.display());
        Ok(table)
    }
}

/// A map point with its (possibly missing) production values attached.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinedPoint {
    pub point: MapPoint,
    pub record: Option<ProductionRecord>,
}

impl JoinedPoint {
    pub fn oil_bbl_per_day(&self) -> Option<i64> {
        self.record.as_ref().and_then(|r| r.oil_bbl_per_day)
    }
}

pub const JOINED_HEADERS: [&str; 9] = [
    "long", "lat", "group", "order", "region", "subregion", "rank", "opec_ind", "oil_bbl_per_day",
];

/// Names that found no partner on the other side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinReport {
    /// Production countries with no polygon (dropped from the map)
    pub unmatched_records: Vec<String>,
    /// Polygon regions with no production record (drawn with the NA colour)
    pub unmatched_regions: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Joined {
    pub points: Vec<JoinedPoint>,
    pub report: JoinReport,
}

/// Left join `points` ← `records` on `region == country` (after aliasing).
pub fn left_join(points: &[MapPoint], records: &[ProductionRecord], aliases: &AliasTable) -> Joined {
    let mut by_name: HashMap<&str, &ProductionRecord> = HashMap::with_capacity(records.len());
    for rec in records {
        let key = aliases.resolve(&rec.country);
        if by_name.contains_key(key) {
            logd!("Join: duplicate country {:?}, keeping first", key);
            continue;
        }
        by_name.insert(key, rec);
    }

    let joined: Vec<JoinedPoint> = points
        .iter()
        .map(|p| JoinedPoint {
            point: p.clone(),
            record: by_name.get(p.region.as_str()).map(|r| (*r).clone()),
        })
        .collect();

    let regions: BTreeSet<&str> = points.iter().map(|p| p.region.as_str()).collect();

    let unmatched_records: Vec<String> = records
        .iter()
        .map(|r| r.country.as_str())
        .filter(|c| !regions.contains(aliases.resolve(c)))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect();

    let unmatched_regions: Vec<String> = regions
        .iter()
        .filter(|r| !by_name.contains_key(*r))
        .map(|r| s!(*r))
        .collect();

    for name in &unmatched_records {
        logd!("Join: no polygon for {:?}", name);
    }
    logf!(
        "Join: points={} matched_points={} unmatched_records={} unmatched_regions={}",
        joined.len(),
        joined.iter().filter(|j| j.record.is_some()).count(),
        unmatched_records.len(),
        unmatched_regions.len()
    );

    Joined {
        points: joined,
        report: JoinReport { unmatched_records, unmatched_regions },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(region: &str, group: u32) -> MapPoint {
        MapPoint { long: 0.0, lat: 0.0, group, order: 1, region: s!(region), subregion: None }
    }

    fn rec(country: &str, bbl: i64) -> ProductionRecord {
        ProductionRecord { rank: Some(1), country: s!(country), opec_ind: 0, oil_bbl_per_day: Some(bbl) }
    }

    #[test]
    fn fan_out_keeps_polygon_cardinality() {
        let points = vec![pt("Norway", 1), pt("Norway", 1), pt("Norway", 2), pt("Chad", 3)];
        let records = vec![rec("Norway", 1_700_000), rec("Qatar", 1_800_000)];
        let j = left_join(&points, &records, &AliasTable::new());

        assert_eq!(j.points.len(), points.len());
        assert!(j.points[..3].iter().all(|p| p.oil_bbl_per_day() == Some(1_700_000)));
        assert_eq!(j.points[3].record, None);
        assert_eq!(j.report.unmatched_records, vec![s!("Qatar")]);
        assert_eq!(j.report.unmatched_regions, vec![s!("Chad")]);
    }

    #[test]
    fn aliases_rename_before_matching() {
        let points = vec![pt("USA", 1)];
        let records = vec![rec("United States[6]", 12_000_000)];

        let plain = left_join(&points, &records, &AliasTable::new());
        assert_eq!(plain.points[0].record, None);

        let mut aliases = AliasTable::new();
        aliases.insert("United States[6]", "USA");
        let fixed = left_join(&points, &records, &aliases);
        assert_eq!(fixed.points[0].oil_bbl_per_day(), Some(12_000_000));
        assert!(fixed.report.unmatched_records.is_empty());
    }

    #[test]
    fn duplicate_country_keeps_first() {
        let points = vec![pt("Oman", 1)];
        let records = vec![rec("Oman", 1), rec("Oman", 2)];
        let j = left_join(&points, &records, &AliasTable::new());
        assert_eq!(j.points[0].oil_bbl_per_day(), Some(1));
    }

    #[test]
    fn alias_csv_skips_header_and_checks_width() {
        let t = AliasTable::parse("source,region\nUnited Kingdom,UK\n").unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.resolve("United Kingdom"), "UK");
        assert_eq!(t.resolve("Norway"), "Norway");

        assert!(AliasTable::parse("a,b,c\n").is_err());
    }
}
