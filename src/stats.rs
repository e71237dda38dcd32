// src/stats.rs
//
// Where the gradient breakpoints come from: split the production values at a
// threshold and take the mean on each side. The aggregate "World production"
// row is a value like any other here.

use crate::clean::ProductionRecord;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideMean {
    pub count: usize,
    pub mean: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitMeans {
    pub threshold: i64,
    pub above: SideMean,
    pub below: SideMean,
}

/// Means of every non-null `oil_bbl_per_day` strictly above / strictly below `threshold`.
pub fn split_means(records: &[ProductionRecord], threshold: i64) -> SplitMeans {
    let values: Vec<i64> = records.iter().filter_map(|r| r.oil_bbl_per_day).collect();

    SplitMeans {
        threshold,
        above: side(&values, |v| v > threshold),
        below: side(&values, |v| v < threshold),
    }
}

fn side(values: &[i64], keep: impl Fn(i64) -> bool) -> SideMean {
    let picked: Vec<i64> = values.iter().copied().filter(|v| keep(*v)).collect();
    SideMean { count: picked.len(), mean: mean(&picked) }
}

fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    Some(sum as f64 / values.len() as f64)
}
