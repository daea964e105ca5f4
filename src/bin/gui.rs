// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use dirview::gui;
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> IconData {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/dirview.png"
    )))
    .unwrap()
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_icon(app_icon()),
        ..Default::default()
    };

    // Missing/malformed directory.json lands here; no partial rendering.
    if let Err(e) = gui::run(options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
