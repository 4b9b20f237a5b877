// src/config/options.rs
//
// Command-line flags. Every flag falls back to NETGEAR_CM_EXPORTER_<FLAG>
// (dots become underscores), so clap already resolves flag > env here.
// Anything still unset is filled from the config file, then from consts.

use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Default, PartialEq, Eq, Parser)]
#[command(
    name = "netgear_cm_exporter",
    version,
    about = "Prometheus exporter for NETGEAR cable modem channel statistics"
)]
pub struct Cli {
    /// Cable modem admin ip address and port.
    #[arg(long = "modem.address", env = "NETGEAR_CM_EXPORTER_MODEM_ADDRESS", value_name = "ADDR")]
    pub modem_address: Option<String>,

    /// Modem admin username.
    #[arg(long = "modem.username", env = "NETGEAR_CM_EXPORTER_MODEM_USERNAME", value_name = "USER")]
    pub modem_username: Option<String>,

    /// Modem admin password.
    #[arg(
        long = "modem.password",
        env = "NETGEAR_CM_EXPORTER_MODEM_PASSWORD",
        value_name = "PASSWORD",
        hide_env_values = true
    )]
    pub modem_password: Option<String>,

    /// Path of the DOCSIS status page (/DocsisStatus.asp or /DocsisStatus.htm).
    #[arg(long = "modem.status_path", env = "NETGEAR_CM_EXPORTER_MODEM_STATUS_PATH", value_name = "PATH")]
    pub modem_status_path: Option<String>,

    /// Status page fetch timeout in seconds. No timeout when unset.
    #[arg(long = "modem.timeout", env = "NETGEAR_CM_EXPORTER_MODEM_TIMEOUT", value_name = "SECS")]
    pub modem_timeout: Option<u64>,

    /// Listen address for metrics endpoint.
    #[arg(long = "telemetry.addr", env = "NETGEAR_CM_EXPORTER_TELEMETRY_ADDR", value_name = "ADDR")]
    pub telemetry_addr: Option<String>,

    /// Path to metric exposition endpoint.
    #[arg(long = "telemetry.path", env = "NETGEAR_CM_EXPORTER_TELEMETRY_PATH", value_name = "PATH")]
    pub telemetry_path: Option<String>,

    /// Path to YAML configuration file. (optional)
    #[arg(long = "config.file", env = "NETGEAR_CM_EXPORTER_CONFIG_FILE", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long = "log.level", env = "NETGEAR_CM_EXPORTER_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<String>,
}
