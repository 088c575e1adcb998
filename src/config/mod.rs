// src/config/mod.rs
pub mod schema;
pub mod settings;

// Re-export commonly used types
pub use schema::{CatalogSchema, ColumnLayout};
pub use settings::Settings;
