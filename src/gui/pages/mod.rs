// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use super::app::App;

pub mod map;
pub mod production;
pub mod unmatched;

pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw page-specific controls above the content.
    fn draw_controls(&self, _ui: &mut egui::Ui, _app: &mut App) {}

    /// Draw the page body.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
