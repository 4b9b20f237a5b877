// src/engine/mod.rs

pub mod fields;
pub mod scan;
pub mod types;

pub use scan::TableScanner;
pub use types::TableSpec;
