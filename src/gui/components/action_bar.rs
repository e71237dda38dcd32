// src/gui/components/action_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format + Output field ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.label("Format:");
        ui.selectable_value(&mut fmt, ExportFormat::Svg, "SVG");
        ui.selectable_value(&mut fmt, ExportFormat::Png, "PNG")
            .on_hover_text("Map raster only: no title, subtitle, caption or legend");
        ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");

        if fmt != prev_fmt {
            export.set_format(fmt);
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export / FETCH) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").on_hover_text("Copy the production table").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let button_fetch = ui.add(
            egui::Button::new(egui::RichText::new("FETCH").color(black).strong())
                .fill(red),
        );
        if button_fetch.clicked() {
            actions::fetch(app);
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}
