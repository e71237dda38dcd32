// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    pipeline::Outputs,
    render::{Gradient, LegendEntry, raster},
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Oil Production Map",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful pipeline run
    pub outputs: Option<Outputs>,

    // rendered map + legend; rebuilt when outputs change
    pub map_texture: Option<egui::TextureHandle>,
    pub map_dirty: bool,
    pub legend: Vec<LegendEntry>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // map data field (-> JoinOptions.map_file on FETCH)
    pub map_file_text: String,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let map_file_text = state.options.join.map_file.to_string_lossy().into_owned();

        let legend = match Gradient::from_options(&state.options.render) {
            Ok(g) => g.legend_with_na(),
            Err(e) => {
                loge!("Init: bad render colours: {}", e);
                Vec::new()
            }
        };

        logf!("Init: default page={:?} map={}", state.gui.current_page, map_file_text);

        Self {
            state,
            outputs: None,
            map_texture: None,
            map_dirty: false,
            legend,
            out_path_text,
            out_path_dirty: false,
            map_file_text,
            status: Arc::new(Mutex::new(s!("Idle. Press FETCH to load the table"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.state.gui.current_page }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(&self.current_page_kind()) }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Install fresh pipeline outputs; the map texture is rebuilt on next draw.
    pub fn set_outputs(&mut self, outputs: Outputs) {
        self.outputs = Some(outputs);
        self.map_dirty = true;
    }

    /// Map texture for the current outputs (rasterized lazily).
    pub fn map_texture(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if self.map_dirty {
            self.map_dirty = false;
            self.map_texture = None;
            if let Some(out) = &self.outputs {
                let render = &self.state.options.render;
                let img = Gradient::from_options(render)
                    .and_then(|g| raster::render_map(&out.joined, &g, render));
                match img {
                    Ok(img) => {
                        let size = [img.width() as usize, img.height() as usize];
                        let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                        self.map_texture = Some(ctx.load_texture("map", color, egui::TextureOptions::LINEAR));
                        logd!("GUI: map texture {}x{}", size[0], size[1]);
                    }
                    Err(e) => {
                        loge!("GUI: map render failed: {}", e);
                        self.status(format!("Render error: {e}"));
                    }
                }
            }
        }
        self.map_texture.as_ref()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
            ui.separator();
            super::components::action_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            page.draw_controls(ui, self);
            page.draw(ui, self);
        });
    }
}
