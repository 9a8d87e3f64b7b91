mod app;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::FirmsFinderApp;
use eframe::egui;
use firms_finder::AppConfig;

fn working_dir() -> Result<PathBuf> {
    std::env::current_dir().context("resolving working directory")
}

fn main() -> eframe::Result {
    env_logger::init();

    let cwd = working_dir().unwrap_or_else(|e| {
        log::error!("{e:#}; looking for config in \".\"");
        PathBuf::from(".")
    });
    let config = AppConfig::load_from_dir(&cwd);
    log::debug!("starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FIRMS Finder – Public FIRMS Code Search",
        options,
        Box::new(|_cc| Ok(Box::new(FirmsFinderApp::new(config)))),
    )
}
