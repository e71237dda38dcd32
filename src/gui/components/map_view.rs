// src/gui/components/map_view.rs
//
// Map texture with the figure text drawn by egui around it:
// title + subtitle on top, legend to the right, caption below.

use eframe::egui::{self, Color32, RichText, Sense};

use crate::{gui::app::App, render::Rgb};

const LEGEND_W: f32 = 130.0;

fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let render = app.state.options.render.clone();

    ui.label(RichText::new(&render.title).size(22.0).strong());
    ui.label(RichText::new(&render.subtitle).size(15.0));
    ui.add_space(6.0);

    let ctx = ui.ctx().clone();
    let Some(texture) = app.map_texture(&ctx).cloned() else {
        ui.label("No map yet. Press FETCH.");
        return;
    };

    // Fit the texture into what's left, keeping its aspect ratio.
    let avail = ui.available_size() - egui::vec2(LEGEND_W, 24.0);
    let tex = texture.size_vec2();
    let scale = (avail.x / tex.x).min(avail.y / tex.y).max(0.1);

    ui.horizontal_top(|ui| {
        ui.add(egui::Image::new(&texture).fit_to_exact_size(tex * scale));

        ui.vertical(|ui| {
            ui.add_space(12.0);
            ui.strong(&render.legend_title);
            for entry in &app.legend {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, color32(entry.color));
                    ui.label(&entry.label);
                });
            }
        });
    });

    ui.label(RichText::new(&render.caption).small().weak());
}
