// src/render/gradient.rs
//
// Piecewise-linear colour scale with explicit value anchors. The anchors are
// spaced for a heavily skewed measure, so each segment spans a different range.

use std::error::Error;

use super::{Rgb, format_thousands};
use crate::config::{consts::NA, options::RenderOptions};

#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<(f64, Rgb)>,
    na: Rgb,
}

/// One legend row: swatch colour + label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

impl Gradient {
    /// `breaks` must be strictly increasing and as long as `colors` (≥ 2).
    pub fn new(breaks: &[f64], colors: &[Rgb], na: Rgb) -> Result<Self, Box<dyn Error>> {
        if breaks.len() != colors.len() {
            return Err(format!("Gradient: {} breaks but {} colours", breaks.len(), colors.len()).into());
        }
        if breaks.len() < 2 {
            return Err("Gradient: need at least two anchors".into());
        }
        if breaks.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(format!("Gradient: breaks must increase strictly ({breaks:?})").into());
        }
        let stops = breaks.iter().copied().zip(colors.iter().copied()).collect();
        Ok(Self { stops, na })
    }

    pub fn from_options(opts: &RenderOptions) -> Result<Self, Box<dyn Error>> {
        let colors = opts
            .palette
            .iter()
            .map(|c| Rgb::parse_hex(c))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&opts.breaks, &colors, Rgb::parse_hex(&opts.na_color)?)
    }

    /// Fill colour for a (nullable) value.
    pub fn color(&self, value: Option<i64>) -> Rgb {
        match value {
            Some(v) => self.color_at(v as f64),
            None => self.na,
        }
    }

    /// Interpolated colour; clamps outside the first/last anchor.
    pub fn color_at(&self, v: f64) -> Rgb {
        let (first_v, first_c) = self.stops[0];
        if v.is_nan() || v <= first_v {
            return first_c;
        }
        for w in self.stops.windows(2) {
            let (lo, c0) = w[0];
            let (hi, c1) = w[1];
            if v <= hi {
                return c0.lerp(c1, (v - lo) / (hi - lo));
            }
        }
        self.stops[self.stops.len() - 1].1
    }

    pub fn na(&self) -> Rgb {
        self.na
    }

    pub fn stops(&self) -> &[(f64, Rgb)] {
        &self.stops
    }

    /// Anchors as legend rows, highest value first.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.stops
            .iter()
            .rev()
            .map(|&(v, color)| LegendEntry { label: format_thousands(v.round() as i64), color })
            .collect()
    }

    /// Legend rows plus a trailing entry for missing values.
    pub fn legend_with_na(&self) -> Vec<LegendEntry> {
        let mut out = self.legend();
        out.push(LegendEntry { label: s!(NA), color: self.na });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_gradient() -> Gradient {
        Gradient::from_options(&RenderOptions::default()).unwrap()
    }

    #[test]
    fn anchors_hit_exact_colours() {
        let g = default_gradient();
        let opts = RenderOptions::default();
        for (b, hex) in opts.breaks.iter().zip(opts.palette.iter()) {
            assert_eq!(g.color_at(*b), Rgb::parse_hex(hex).unwrap(), "break {b}");
        }
    }

    #[test]
    fn clamps_outside_the_range() {
        let g = default_gradient();
        assert_eq!(g.color(Some(0)), g.stops()[0].1);
        assert_eq!(g.color(Some(80_000_000)), g.stops()[4].1);
    }

    #[test]
    fn null_uses_na_colour() {
        let g = default_gradient();
        assert_eq!(g.color(None), g.na());
    }

    #[test]
    fn interpolates_within_a_segment() {
        let g = Gradient::new(&[0.0, 10.0], &[Rgb::new(0, 0, 0), Rgb::new(100, 200, 50)], Rgb::new(1, 1, 1)).unwrap();
        assert_eq!(g.color(Some(5)), Rgb::new(50, 100, 25));
    }

    #[test]
    fn legend_is_reversed() {
        let labels: Vec<String> = default_gradient().legend().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["10,000,000", "3,190,373", "822,675", "96,581", "100"]);
        assert_eq!(default_gradient().legend_with_na().last().map(|e| e.label.as_str()), Some("NA"));
    }

    #[test]
    fn rejects_bad_anchors() {
        let c = [Rgb::new(0, 0, 0), Rgb::new(1, 1, 1)];
        assert!(Gradient::new(&[5.0, 5.0], &c, c[0]).is_err());
        assert!(Gradient::new(&[1.0], &c[..1], c[0]).is_err());
        assert!(Gradient::new(&[1.0, 2.0, 3.0], &c, c[0]).is_err());
    }
}
