// src/render/svg.rs
//
// Full figure as SVG: background, one <polygon> per group in map order,
// title + subtitle on top, source caption bottom-left, legend on the right.

use std::{error::Error, fmt::Write as _, fs, path::Path};

use super::{Bounds, FigureLayout, Gradient, Projection};
use crate::config::options::RenderOptions;
use crate::join::JoinedPoint;

const SWATCH: f64 = 16.0;
const ROW_H: f64 = 24.0;

pub fn render(joined: &[JoinedPoint], gradient: &Gradient, opts: &RenderOptions) -> String {
    let layout = FigureLayout::figure(opts.width, opts.height);
    let mut out = String::with_capacity(64 * joined.len() + 2048);

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
        w = opts.width,
        h = opts.height,
        font = escape(&opts.font_family),
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, escape(&opts.background));

    write_map(&mut out, joined, gradient, opts, &layout);
    write_text(&mut out, opts, &layout);
    write_legend(&mut out, gradient, opts, &layout);

    out.push_str("</svg>\n");
    out
}

pub fn save(svg: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    fs::write(path, svg).map_err(|e| format!("Cannot write SVG {}: {}", path.display(), e))?;
    Ok(())
}

fn write_map(out: &mut String, joined: &[JoinedPoint], gradient: &Gradient, opts: &RenderOptions, layout: &FigureLayout) {
    let Some(bounds) = Bounds::of(joined.iter().map(|j| &j.point)) else { return };
    let proj = Projection::fit(bounds, layout.map);

    match &opts.outline {
        Some(c) => { let _ = writeln!(out, r#"<g id="map" stroke="{}" stroke-width="0.4">"#, escape(c)); }
        None => out.push_str("<g id=\"map\" stroke=\"none\">\n"),
    }

    for poly in joined.chunk_by(|a, b| a.point.group == b.point.group) {
        let first = &poly[0];
        let fill = gradient.color(first.oil_bbl_per_day());
        let _ = write!(
            out,
            r#"<polygon data-region="{}" data-group="{}" fill="{}" points=""#,
            escape(&first.point.region),
            first.point.group,
            fill.to_hex()
        );
        for (i, j) in poly.iter().enumerate() {
            let (x, y) = proj.project(j.point.long, j.point.lat);
            if i > 0 { out.push(' '); }
            let _ = write!(out, "{x:.2},{y:.2}");
        }
        out.push_str("\"/>\n");
    }
    out.push_str("</g>\n");
}

fn write_text(out: &mut String, opts: &RenderOptions, layout: &FigureLayout) {
    let color = escape(&opts.text_color);
    let _ = writeln!(
        out,
        r#"<text id="title" x="20" y="38" font-size="26" font-weight="bold" fill="{color}">{}</text>"#,
        escape(&opts.title)
    );
    let _ = writeln!(
        out,
        r#"<text id="subtitle" x="20" y="64" font-size="16" fill="{color}">{}</text>"#,
        escape(&opts.subtitle)
    );
    let _ = writeln!(
        out,
        r#"<text id="caption" x="20" y="{:.0}" font-size="11" fill="{color}">{}</text>"#,
        layout.height - 14.0,
        escape(&opts.caption)
    );
}

fn write_legend(out: &mut String, gradient: &Gradient, opts: &RenderOptions, layout: &FigureLayout) {
    let color = escape(&opts.text_color);
    let (x, y) = (layout.legend_x, layout.legend_y);
    let _ = writeln!(out, r#"<g id="legend" transform="translate({x:.0},{y:.0})">"#);
    let _ = writeln!(
        out,
        r#"<text x="0" y="0" font-size="13" font-weight="bold" fill="{color}">{}</text>"#,
        escape(&opts.legend_title)
    );
    for (i, entry) in gradient.legend_with_na().iter().enumerate() {
        let top = 10.0 + i as f64 * ROW_H;
        let _ = writeln!(
            out,
            r#"<rect x="0" y="{top:.0}" width="{SWATCH}" height="{SWATCH}" fill="{}"/><text x="{:.0}" y="{:.0}" font-size="12" fill="{color}">{}</text>"#,
            entry.color.to_hex(),
            SWATCH + 8.0,
            top + SWATCH - 3.0,
            escape(&entry.label)
        );
    }
    out.push_str("</g>\n");
}

/// XML text/attribute escaping.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
