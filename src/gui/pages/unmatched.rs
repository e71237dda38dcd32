// src/gui/pages/unmatched.rs
//
// Join report: names that found no partner, plus the split means that the
// gradient breakpoints are read from.

use eframe::egui;

use crate::{
    config::{consts::SPLIT_THRESHOLD, options::PageKind},
    gui::{app::App, components::data_table},
    render::format_thousands,
    stats::{self, SideMean},
};
use super::Page;

pub struct UnmatchedPage;
pub static PAGE: UnmatchedPage = UnmatchedPage;

impl Page for UnmatchedPage {
    fn label(&self) -> &'static str { "Unmatched" }
    fn kind(&self) -> PageKind { PageKind::Unmatched }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(out) = &app.outputs else {
            ui.label("No data yet.");
            return;
        };

        let split = stats::split_means(&out.records, SPLIT_THRESHOLD);
        let side = |m: SideMean| match m.mean {
            Some(v) => format!("{} values, mean {}", m.count, format_thousands(v.round() as i64)),
            None => format!("{} values", m.count),
        };
        ui.label(format!(
            "Above {}: {}   Below: {}",
            format_thousands(split.threshold),
            side(split.above),
            side(split.below)
        ));
        ui.separator();

        let as_rows = |names: &[String]| names.iter().map(|n| vec![n.clone()]).collect::<Vec<_>>();
        let records = as_rows(&out.report.unmatched_records);
        let regions = as_rows(&out.report.unmatched_regions);

        ui.columns(2, |cols| {
            cols[0].strong(format!("Production records without a polygon ({})", records.len()));
            data_table::draw(&mut cols[0], "unmatched_records", &["country"], &records, &[false]);
            cols[1].strong(format!("Regions without a production record ({})", regions.len()));
            data_table::draw(&mut cols[1], "unmatched_regions", &["region"], &regions, &[false]);
        });
    }
}
