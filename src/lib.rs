// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod exporter;
pub mod server;
pub mod specs;

pub use error::{Error, Result};
pub use exporter::{Exporter, ScrapeOutcome, ScrapeStats, ScrapeSummary};
