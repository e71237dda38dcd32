// src/gui/components/data_table.rs
//
// Read-only striped table. Purely a view over the rows it is given.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

pub fn draw(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: &[Vec<String>], numeric: &[bool]) {
    let is_numeric = |ci: usize| numeric.get(ci).copied().unwrap_or(false);

    let mut table = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(f32::INFINITY);
    for ci in 0..headers.len() {
        let w = if is_numeric(ci) { 110.0 } else { 240.0 };
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(*h).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(data) = rows.get(row.index()) else { return };
                for (ci, cell) in data.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if is_numeric(ci) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(cell); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        }
                    });
                }
            });
        });
}
