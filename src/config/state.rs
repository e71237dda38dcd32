// src/config/state.rs
use super::options::{AppOptions, PageKind};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab
    pub current_page: PageKind,

    pub window_w: u32,
    pub window_h: u32,

    /// Production page -> only rows flagged as OPEC members
    pub production_opec_only: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page: PageKind::Map,
            window_w: 1280,
            window_h: 860,
            production_opec_only: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
