// src/gui/actions/copy.rs
use eframe::egui;
use crate::{file, gui::{app::App, pages::production::visible_records}};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(outputs) = &app.outputs else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let records = visible_records(&outputs.records, app.state.gui.production_opec_only);
    logf!("Copy: rows={}", records.len());
    let txt = file::records_export_string(&records, &app.state.options.export);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
