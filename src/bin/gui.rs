// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use datausa_catalog::{config::state::GuiState, gui};
use eframe::egui::{ IconData, ViewportBuilder };
use image::{ Rgba, RgbaImage };

const ICON_SIZE: u32 = 64;

// Three stacked bars on a dark tile, one per category
fn app_icon() -> IconData {
    let bars = [
        (Rgba([0x4c, 0x9a, 0xff, 0xff]), 44),
        (Rgba([0x5c, 0xc8, 0x7a, 0xff]), 32),
        (Rgba([0xf2, 0xa6, 0x3b, 0xff]), 52),
    ];
    let bg = Rgba([0x1e, 0x22, 0x2a, 0xff]);

    let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let row = y.saturating_sub(8) / 16;
        let within = y.saturating_sub(8) % 16;
        match bars.get(row as usize) {
            Some(&(color, len)) if y >= 8 && within < 12 && (8..8 + len).contains(&x) => color,
            _ => bg,
        }
    });
    IconData { rgba: rgba.into_raw(), width: ICON_SIZE, height: ICON_SIZE }
}

fn main() {
    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gs.window_w as f32, gs.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
