// src/config/consts.rs

// Modem
pub const DEFAULT_MODEM_ADDRESS: &str = "192.168.100.1";
pub const DEFAULT_MODEM_USERNAME: &str = "admin";
pub const DEFAULT_STATUS_PATH: &str = "/DocsisStatus.asp";

// Telemetry
pub const DEFAULT_LISTEN_ADDRESS: &str = "localhost:9526";
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Metrics
pub const NAMESPACE: &str = "netgear_cm";
