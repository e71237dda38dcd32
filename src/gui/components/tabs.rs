// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_page_kind();
        for page in router::all_pages() {
            let selected = page.kind() == cur;
            if ui.selectable_label(selected, page.label()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, page.kind());
                app.state.gui.current_page = page.kind();
            }
        }
    });
}
