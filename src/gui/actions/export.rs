// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
        // a typed extension may have switched the format
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    }

    let status_msg = match &app.outputs {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export. Press FETCH first")
        }
        Some(outputs) => match file::export(outputs, &app.state.options) {
            Ok(path) => format!("Exported {}", path.display()),
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        },
    };

    app.status(status_msg);
}
