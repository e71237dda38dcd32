// src/render/mod.rs
//
// Choropleth rendering. `gradient` maps values to colours, `projection` maps
// lon/lat to pixels, `raster` fills polygons into an image, `svg` writes the
// full figure (map, titles, caption, legend).

use std::error::Error;

pub mod gradient;
pub mod projection;
pub mod raster;
pub mod svg;

pub use gradient::{Gradient, LegendEntry};
pub use projection::{Bounds, PlotRect, Projection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(s: &str) -> Result<Self, Box<dyn Error>> {
        let h = s.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(format!("Bad colour {s:?}, expected #rrggbb").into());
        }
        let byte = |i: usize| {
            u8::from_str_radix(&h[i..i + 2], 16).map_err(|_| format!("Bad colour {s:?}"))
        };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend; `t` is clamped to 0..=1.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Where things go on the figure canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureLayout {
    pub width: f64,
    pub height: f64,
    pub map: PlotRect,
    pub legend_x: f64,
    pub legend_y: f64,
}

impl FigureLayout {
    const TOP: f64 = 84.0;
    const BOTTOM: f64 = 36.0;
    const SIDE: f64 = 20.0;
    const LEGEND_W: f64 = 150.0;

    /// Title band on top, caption band at the bottom, legend on the right.
    pub fn figure(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        let map = PlotRect {
            x: Self::SIDE,
            y: Self::TOP,
            w: (w - 2.0 * Self::SIDE - Self::LEGEND_W).max(1.0),
            h: (h - Self::TOP - Self::BOTTOM).max(1.0),
        };
        Self {
            width: w,
            height: h,
            map,
            legend_x: map.x + map.w + Self::SIDE,
            legend_y: Self::TOP + 16.0,
        }
    }

    /// Map fills the whole canvas (GUI texture, PNG export).
    pub fn map_only(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            width: w,
            height: h,
            map: PlotRect { x: 0.0, y: 0.0, w, h },
            legend_x: w,
            legend_y: 0.0,
        }
    }
}

/// Thousands-grouped integer: 10000000 → "10,000,000".
pub fn format_thousands(v: i64) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if v < 0 { out.push('-'); }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}
