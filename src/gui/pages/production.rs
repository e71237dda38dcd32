// src/gui/pages/production.rs
use eframe::egui;

use crate::{
    clean::{ProductionRecord, RECORD_HEADERS},
    config::options::PageKind,
    file::records_to_rows,
    gui::{app::App, components::data_table},
};
use super::Page;

pub struct ProductionPage;
pub static PAGE: ProductionPage = ProductionPage;

/// rank, opec_ind, oil_bbl_per_day are right-aligned
const NUMERIC: [bool; 4] = [true, false, true, true];

/// Records shown on the page (and copied): all, or OPEC members only.
pub fn visible_records(records: &[ProductionRecord], opec_only: bool) -> Vec<ProductionRecord> {
    records
        .iter()
        .filter(|r| !opec_only || r.opec_ind == 1)
        .cloned()
        .collect()
}

impl Page for ProductionPage {
    fn label(&self) -> &'static str { "Production" }
    fn kind(&self) -> PageKind { PageKind::Production }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            let gui = &mut app.state.gui;
            if ui.checkbox(&mut gui.production_opec_only, "OPEC members only").changed() {
                logf!("UI: production_opec_only → {}", gui.production_opec_only);
            }
            let before = app.state.options.clean.strict_headers;
            ui.checkbox(&mut app.state.options.clean.strict_headers, "Check header text")
                .on_hover_text("Off: only the column count is checked before renaming");
            if app.state.options.clean.strict_headers != before {
                logf!("UI: strict_headers → {}", app.state.options.clean.strict_headers);
            }
        });
        ui.separator();
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(out) = &app.outputs else {
            ui.label("No data yet.");
            return;
        };
        let rows = records_to_rows(&visible_records(&out.records, app.state.gui.production_opec_only));
        ui.label(format!("{} rows", rows.len()));
        data_table::draw(ui, "production", &RECORD_HEADERS, &rows, &NUMERIC);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opec_filter() {
        let recs = vec![
            ProductionRecord { rank: Some(1), country: s!("A"), opec_ind: 1, oil_bbl_per_day: Some(3) },
            ProductionRecord { rank: Some(2), country: s!("B"), opec_ind: 0, oil_bbl_per_day: Some(2) },
        ];
        assert_eq!(visible_records(&recs, false).len(), 2);
        let opec = visible_records(&recs, true);
        assert_eq!(opec.len(), 1);
        assert_eq!(opec[0].country, "A");
    }
}
