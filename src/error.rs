// src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid settings after all sources were merged.
    #[error("{0}")]
    Config(String),

    #[error("failed to read config file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid table selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    #[error("request to modem failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("modem returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("metrics registry: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
