// src/render/projection.rs
//
// Equirectangular projection fitted to the data's bounding box: one degree of
// longitude is as wide as one degree of latitude is tall, north is up.

use crate::map_data::MapPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_long: f64,
    pub max_long: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn of<'a>(points: impl IntoIterator<Item = &'a MapPoint>) -> Option<Bounds> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Bounds {
            min_long: first.long,
            max_long: first.long,
            min_lat: first.lat,
            max_lat: first.lat,
        };
        for p in it {
            b.min_long = b.min_long.min(p.long);
            b.max_long = b.max_long.max(p.long);
            b.min_lat = b.min_lat.min(p.lat);
            b.max_lat = b.max_lat.max(p.lat);
        }
        Some(b)
    }

    fn span_long(&self) -> f64 {
        (self.max_long - self.min_long).max(f64::EPSILON)
    }

    fn span_lat(&self) -> f64 {
        (self.max_lat - self.min_lat).max(f64::EPSILON)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    bounds: Bounds,
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl Projection {
    /// Largest uniform scale that fits `bounds` into `rect`, centred.
    pub fn fit(bounds: Bounds, rect: PlotRect) -> Self {
        let scale = (rect.w / bounds.span_long()).min(rect.h / bounds.span_lat());
        let used_w = bounds.span_long() * scale;
        let used_h = bounds.span_lat() * scale;
        Self {
            bounds,
            scale,
            origin_x: rect.x + (rect.w - used_w) / 2.0,
            origin_y: rect.y + (rect.h - used_h) / 2.0,
        }
    }

    /// (long, lat) → canvas (x, y), y growing downwards.
    pub fn project(&self, long: f64, lat: f64) -> (f64, f64) {
        let x = self.origin_x + (long - self.bounds.min_long) * self.scale;
        let y = self.origin_y + (self.bounds.max_lat - lat) * self.scale;
        (x, y)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(long: f64, lat: f64) -> MapPoint {
        MapPoint { long, lat, group: 1, order: 1, region: s!("R"), subregion: None }
    }

    #[test]
    fn bounds_cover_all_points() {
        let pts = [pt(-10.0, 5.0), pt(20.0, -5.0), pt(0.0, 40.0)];
        let b = Bounds::of(&pts).unwrap();
        assert_eq!((b.min_long, b.max_long, b.min_lat, b.max_lat), (-10.0, 20.0, -5.0, 40.0));
        assert!(Bounds::of(&[] as &[MapPoint]).is_none());
    }

    #[test]
    fn north_west_corner_maps_to_top_left() {
        let b = Bounds { min_long: -180.0, max_long: 180.0, min_lat: -90.0, max_lat: 90.0 };
        let p = Projection::fit(b, PlotRect { x: 0.0, y: 0.0, w: 360.0, h: 180.0 });
        assert_eq!(p.project(-180.0, 90.0), (0.0, 0.0));
        assert_eq!(p.project(180.0, -90.0), (360.0, 180.0));
        assert_eq!(p.project(0.0, 0.0), (180.0, 90.0));
    }

    #[test]
    fn keeps_aspect_and_centres() {
        let b = Bounds { min_long: 0.0, max_long: 10.0, min_lat: 0.0, max_lat: 10.0 };
        let p = Projection::fit(b, PlotRect { x: 0.0, y: 0.0, w: 200.0, h: 100.0 });
        assert_eq!(p.scale(), 10.0);
        // 100 px wide map centred in 200 px
        assert_eq!(p.project(0.0, 10.0), (50.0, 0.0));
    }
}
