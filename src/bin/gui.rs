// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use oil_map::{config::state::GuiState, gui};

/// 64×64 icon: an oil drop on the map background colour.
fn app_icon() -> IconData {
    const N: u32 = 64;
    let bg = Rgba([0x1d, 0x23, 0x30, 0xff]);
    let oil = Rgba([0xd9, 0x5f, 0x0e, 0xff]);
    let img = RgbaImage::from_fn(N, N, |x, y| {
        let (fx, fy) = (x as f32 - 32.0, y as f32 - 38.0);
        let in_bulb = fx * fx + fy * fy <= 18.0 * 18.0;
        // tapering tip above the bulb
        let in_tip = y >= 6 && y < 38 && fx.abs() <= (y as f32 - 6.0) * 0.55;
        if in_bulb || in_tip { oil } else { bg }
    });
    IconData { rgba: img.into_raw(), width: N, height: N }
}

fn main() {
    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
