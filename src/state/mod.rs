// src/state/mod.rs
use crate::catalog::{Catalog, Requirements};
use crate::config::Settings;
use crate::ui::results::format_recommendations;

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub settings: Settings,
    pub requirements: Requirements,
    pub results: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let requirements = catalog.requirements();
        Self {
            catalog,
            settings,
            requirements,
            results: None,
        }
    }

    pub fn heading(&self) -> String {
        format!("Select the {} features you require:", self.catalog.key_name())
    }

    pub fn generate_results(&mut self) {
        let matches = self.catalog.query(&self.requirements, self.settings.limit());
        self.results = Some(format_recommendations(&matches, &self.settings.currency));
    }

    pub fn reset_all(&mut self) {
        self.requirements.reset();
        self.results = None;
    }
}
