// src/file/mod.rs
use anyhow::Result;
use std::path::Path;

pub mod catalog;

pub use catalog::CatalogFileHandler;

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
}
