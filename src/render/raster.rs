// src/render/raster.rs
//
// Polygon fill onto an RGBA image. Each polygon group is filled on its own
// with the even-odd rule, sampling pixel centres; vertex order is the file order.

use std::{error::Error, path::Path};

use image::{Rgba, RgbaImage};

use super::{Bounds, FigureLayout, Gradient, Projection, Rgb};
use crate::config::options::RenderOptions;
use crate::join::JoinedPoint;

fn rgba(c: Rgb) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}

/// Map-only raster: background plus every polygon, no text.
pub fn render_map(
    joined: &[JoinedPoint],
    gradient: &Gradient,
    opts: &RenderOptions,
) -> Result<RgbaImage, Box<dyn Error>> {
    let layout = FigureLayout::map_only(opts.width, opts.height);
    let background = Rgb::parse_hex(&opts.background)?;
    let outline = opts.outline.as_deref().map(Rgb::parse_hex).transpose()?;

    let mut img = RgbaImage::from_pixel(opts.width, opts.height, rgba(background));

    let Some(bounds) = Bounds::of(joined.iter().map(|j| &j.point)) else {
        logd!("Raster: no points, background only");
        return Ok(img);
    };
    let proj = Projection::fit(bounds, layout.map);

    let mut groups = 0usize;
    for poly in joined.chunk_by(|a, b| a.point.group == b.point.group) {
        let verts: Vec<(f64, f64)> = poly
            .iter()
            .map(|j| proj.project(j.point.long, j.point.lat))
            .collect();
        let fill = gradient.color(poly[0].oil_bbl_per_day());
        fill_polygon(&mut img, &verts, rgba(fill));
        if let Some(line) = outline {
            stroke_polygon(&mut img, &verts, rgba(line));
        }
        groups += 1;
    }
    logd!("Raster: {}x{} groups={}", opts.width, opts.height, groups);
    Ok(img)
}

pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), Box<dyn Error>> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| format!("Cannot write PNG {}: {}", path.display(), e))?;
    Ok(())
}

/// Even-odd scanline fill. Pixels whose centre lies inside are painted.
pub fn fill_polygon(img: &mut RgbaImage, verts: &[(f64, f64)], color: Rgba<u8>) {
    if verts.len() < 3 {
        return;
    }
    let (w, h) = (img.width() as i64, img.height() as i64);
    let min_y = verts.iter().map(|v| v.1).fold(f64::INFINITY, f64::min);
    let max_y = verts.iter().map(|v| v.1).fold(f64::NEG_INFINITY, f64::max);
    let y0 = (min_y.floor() as i64).max(0);
    let y1 = (max_y.ceil() as i64).min(h - 1);

    let mut xs: Vec<f64> = Vec::new();
    for y in y0..=y1 {
        let yc = y as f64 + 0.5;
        xs.clear();
        for i in 0..verts.len() {
            let (xa, ya) = verts[i];
            let (xb, yb) = verts[(i + 1) % verts.len()];
            if (ya <= yc && yc < yb) || (yb <= yc && yc < ya) {
                xs.push(xa + (yc - ya) * (xb - xa) / (yb - ya));
            }
        }
        xs.sort_by(|a, b| a.total_cmp(b));
        for pair in xs.chunks_exact(2) {
            // centres x + 0.5 in [left, right)
            let from = ((pair[0] - 0.5).ceil() as i64).max(0);
            let to = ((pair[1] - 0.5).ceil() as i64 - 1).min(w - 1);
            for x in from..=to {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Closed outline, one pixel wide.
pub fn stroke_polygon(img: &mut RgbaImage, verts: &[(f64, f64)], color: Rgba<u8>) {
    if verts.len() < 2 {
        return;
    }
    for i in 0..verts.len() {
        let a = verts[i];
        let b = verts[(i + 1) % verts.len()];
        draw_line(img, a, b, color);
    }
}

// Bresenham; off-canvas pixels are skipped.
fn draw_line(img: &mut RgbaImage, a: (f64, f64), b: (f64, f64), color: Rgba<u8>) {
    let (mut x0, mut y0) = (a.0.floor() as i64, a.1.floor() as i64);
    let (x1, y1) = (b.0.floor() as i64, b.1.floor() as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (w, h) = (img.width() as i64, img.height() as i64);

    loop {
        if (0..w).contains(&x0) && (0..h).contains(&y0) {
            img.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
