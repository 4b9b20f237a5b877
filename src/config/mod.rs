// src/config/mod.rs
//! Resolved exporter settings.
//!
//! Precedence per key: explicit flag > environment > config file > built-in default.
//! clap handles the first two (see [`options::Cli`]); [`Config::merge`] layers the
//! file and the defaults underneath.

pub mod consts;
pub mod file;
pub mod options;

use std::fmt;
use std::time::Duration;

use consts::*;
pub use file::FileConfig;
pub use options::Cli;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub modem: Modem,
    pub telemetry: Telemetry,
    pub log_level: String,
}

/// Address of the modem and its admin credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Modem {
    pub address: String,
    pub username: String,
    pub password: String,
    pub status_path: String,
    pub timeout: Option<Duration>,
}

/// The exporter's listen address and metrics URI path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Telemetry {
    pub listen_address: String,
    pub metrics_path: String,
}

impl Config {
    /// Read the config file named by `--config.file` (if any) and merge.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let file = match &cli.config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    pub fn merge(cli: Cli, file: FileConfig) -> Result<Self> {
        let FileConfig { modem: fm, telemetry: ft } = file;

        let password = cli.modem_password.or(fm.password).unwrap_or_default();
        if password.is_empty() {
            return Err(Error::Config(s!("modem password isn't set (use --modem.password, NETGEAR_CM_EXPORTER_MODEM_PASSWORD or the config file)")));
        }

        let modem = Modem {
            address: cli.modem_address.or(fm.address).unwrap_or_else(|| s!(DEFAULT_MODEM_ADDRESS)),
            username: cli.modem_username.or(fm.username).unwrap_or_else(|| s!(DEFAULT_MODEM_USERNAME)),
            password,
            status_path: leading_slash(cli.modem_status_path.or(fm.status_path).unwrap_or_else(|| s!(DEFAULT_STATUS_PATH))),
            timeout: cli.modem_timeout.or(fm.timeout).map(Duration::from_secs),
        };

        let telemetry = Telemetry {
            listen_address: cli.telemetry_addr.or(ft.listen_address).unwrap_or_else(|| s!(DEFAULT_LISTEN_ADDRESS)),
            metrics_path: leading_slash(cli.telemetry_path.or(ft.metrics_path).unwrap_or_else(|| s!(DEFAULT_METRICS_PATH))),
        };

        Ok(Self {
            modem,
            telemetry,
            log_level: cli.log_level.unwrap_or_else(|| s!(DEFAULT_LOG_LEVEL)),
        })
    }
}

impl Modem {
    pub fn status_url(&self) -> String {
        join!("http://", &self.address, &self.status_path)
    }
}

impl fmt::Debug for Modem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modem")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("status_path", &self.status_path)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Telemetry {
    /// Address to bind. A bare ":port" listens on all interfaces.
    pub fn bind_address(&self) -> String {
        if self.listen_address.starts_with(':') {
            join!("0.0.0.0", &self.listen_address)
        } else {
            self.listen_address.clone()
        }
    }
}

fn leading_slash(path: String) -> String {
    if path.starts_with('/') { path } else { join!("/", &path) }
}
