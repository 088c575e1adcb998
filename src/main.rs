// src/main.rs
use eframe::egui;
use anyhow::Result;
use log::info;

mod app;
mod catalog;
mod config;
mod file;
mod state;
mod ui;

use crate::app::ProductSelectorApp;
use crate::config::Settings;
use crate::file::{CatalogFileHandler, FileHandler};
use crate::state::AppState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    let catalog = CatalogFileHandler::new(settings.schema.clone(), settings.sheet.clone())
        .load(&settings.data_file)?;
    info!("Catalog ready: {} features per product", catalog.feature_names().len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 640.0])
            .with_title(settings.window_title.as_str()),
        ..Default::default()
    };

    let state = AppState::new(catalog, settings);
    eframe::run_native(
        "Product Selector",
        options,
        Box::new(|_cc| Box::new(ProductSelectorApp::new(state))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
