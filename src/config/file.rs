// src/config/file.rs
//
// YAML config file. Every key is optional; unset keys fall through to consts.
//
//   modem:
//     address: 192.168.100.1
//     username: admin
//     password: secret
//     status_path: /DocsisStatus.htm
//     timeout: 10
//   telemetry:
//     listen_address: ":9527"
//     metrics_path: /metrics

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub modem: FileModem,
    pub telemetry: FileTelemetry,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileModem {
    pub address: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub status_path: Option<String>,
    pub timeout: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileTelemetry {
    pub listen_address: Option<String>,
    pub metrics_path: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        logd!("Config: loaded {} bytes from {}", content.len(), path.display());
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document is a valid "no overrides" file.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
