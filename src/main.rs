// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Swatchbook - Main Entry Point
//!
//! A colors panel that imports palettes from literal-data files and exports
//! them back. Built with Rust and egui.

use log::info;
use swatchbook::app::SwatchbookApp;
use swatchbook::config::load_config;

/// Application name constant.
const APP_NAME: &str = "Swatchbook";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    let settings = load_config();
    info!(
        "Transfer configuration: export width {}, export format {}",
        settings.export_width,
        settings.export_format.label()
    );

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([640.0, 420.0])
        .with_min_inner_size([320.0, 200.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(SwatchbookApp::new(cc, settings)))),
    )
}
