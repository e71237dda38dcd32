// src/gui/pages/map.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::{app::App, components::map_view}};
use super::Page;

pub struct MapPage;
pub static PAGE: MapPage = MapPage;

impl Page for MapPage {
    fn label(&self) -> &'static str { "Map" }
    fn kind(&self) -> PageKind { PageKind::Map }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.label("Map data:");
            if ui
                .add(egui::TextEdit::singleline(&mut app.map_file_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(280.0))
                .changed()
            {
                logd!("UI: map_file_text → {}", app.map_file_text);
            }

            let mut outline = app.state.options.render.outline.is_some();
            if ui.checkbox(&mut outline, "Borders").changed() {
                app.state.options.render.outline =
                    outline.then(|| s!(crate::config::consts::OUTLINE));
                app.map_dirty = true;
                logf!("UI: outline → {}", outline);
            }
        });
        ui.separator();
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        map_view::draw(ui, app);
    }
}
