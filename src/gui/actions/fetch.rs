// src/gui/actions/fetch.rs
use std::path::PathBuf;

use crate::{gui::app::App, gui::progress::GuiProgress, pipeline};

pub fn fetch(app: &mut App) {
    // Map data path typed in the Map tab
    let map_file = PathBuf::from(app.map_file_text.trim());
    if map_file != app.state.options.join.map_file {
        logf!("Fetch: map file → {}", map_file.display());
        app.state.options.join.map_file = map_file;
    }

    logf!("Fetch: Begin source={:?}", app.state.options.fetch.source);

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the pipeline runs ←
    match pipeline::run(&app.state.options, Some(&mut prog)) {
        Ok(outputs) => {
            logf!(
                "Fetch: OK records={} points={} matched={}",
                outputs.records.len(),
                outputs.joined.len(),
                outputs.matched_points()
            );
            app.set_outputs(outputs);
        }
        Err(e) => {
            loge!("Fetch: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
