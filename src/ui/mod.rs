// src/ui/mod.rs
pub mod selector;
pub mod results;
