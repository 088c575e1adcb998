// src/config/settings.rs
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use ::config::{Config, File, FileFormat};
use log::debug;
use serde::{Serialize, Deserialize};

use super::CatalogSchema;

pub const APP_DIR: &str = "product-selector";
pub const SETTINGS_FILE: &str = "settings.ron";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub data_file: PathBuf,
    /// Worksheet read when `data_file` is a workbook.
    pub sheet: String,
    pub currency: String,
    /// 0 shows every match.
    pub max_results: usize,
    pub window_title: String,
    pub schema: CatalogSchema,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("securitycameras2.csv"),
            sheet: "Sheet1".to_string(),
            currency: "£".to_string(),
            max_results: 5,
            window_title: "Product Selector".to_string(),
            schema: CatalogSchema::default(),
        }
    }
}

impl Settings {
    /// User config dir first, then the working directory.
    pub fn default_sources() -> Vec<PathBuf> {
        let mut sources = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            sources.push(config_dir.join(APP_DIR).join(SETTINGS_FILE));
        }
        sources.push(PathBuf::from(SETTINGS_FILE));
        sources
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_sources())
    }

    /// Layers the given RON files over the defaults; later files win and
    /// missing files are skipped.
    pub fn load_from<P: AsRef<Path>>(sources: &[P]) -> Result<Self> {
        let mut builder = Config::builder();
        for source in sources {
            let path = source.as_ref();
            debug!("Settings source: {} (present: {})", path.display(), path.exists());
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Ron)
                    .required(false)
            );
        }

        builder
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")
    }

    pub fn limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}
