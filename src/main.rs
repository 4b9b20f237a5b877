// src/main.rs
// Prometheus exporter for NETGEAR cable modem channel statistics.
// Usage:
//   netgear_cm_exporter --modem.password <pw>
//   NETGEAR_CM_EXPORTER_MODEM_PASSWORD=<pw> netgear_cm_exporter --telemetry.addr :9527
//   netgear_cm_exporter --config.file netgear.yml

use std::sync::Arc;

use clap::Parser;
use netgear_cm_exporter::{
    Exporter,
    config::{Cli, Config},
    core::HttpFetcher,
    log, logd, logf, server, specs,
};
use prometheus::Registry;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::from_cli(Cli::parse())?;
    log::init(&config.log_level);
    logf!("starting netgear_cm_exporter {}", env!("CARGO_PKG_VERSION"));

    // Build the blocking HTTP client before any async runtime exists.
    let fetcher = HttpFetcher::new(&config.modem)?;
    logf!("scraping {} as {}", fetcher.url(), config.modem.username);

    let registry = Arc::new(Registry::new());
    let exporter = Exporter::new(fetcher, specs::NETGEAR_CM)?;
    logd!("page layout: {}", exporter.spec().name);
    exporter.register(&registry)?;
    register_process_metrics(&registry)?;

    let state = server::AppState::new(Arc::clone(&registry), &config.telemetry.metrics_path);
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(server::serve(&config.telemetry.bind_address(), state))?;

    Ok(())
}

#[cfg(target_os = "linux")]
fn register_process_metrics(registry: &Registry) -> prometheus::Result<()> {
    registry.register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))
}

#[cfg(not(target_os = "linux"))]
fn register_process_metrics(_registry: &Registry) -> prometheus::Result<()> {
    Ok(())
}
