// src/exporter.rs
//! Scrape orchestration: one fetch → parse → publish cycle per collect.
//!
//! State machine per cycle:
//! `Idle → Fetching → {Parsing → Publishing → Idle} | Failed → Idle`.
//! Nothing survives a cycle except the two scrape counters. Per-channel
//! families are reset at the start of every cycle, so a failed fetch
//! publishes no channel readings and channels that vanish from the page
//! vanish from the exposition.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{CounterVec, GaugeVec, IntCounter, Opts, Registry};
use scraper::Html;

use crate::config::consts::NAMESPACE;
use crate::core::Fetch;
use crate::error::Result;
use crate::specs::downstream::DownstreamChannelReading;
use crate::specs::upstream::UpstreamChannelReading;
use crate::specs::{ModemSpec, PageScanner};

const DS_LABELS: [&str; 5] = ["channel", "lock_status", "modulation", "channel_id", "frequency"];
const US_LABELS: [&str; 5] = ["channel", "lock_status", "channel_type", "channel_id", "frequency"];

/// Snapshot of the cumulative scrape counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrapeOutcome {
    pub attempted: u64,
    pub failed: u64,
}

/// Cheap clonable handle on the scrape counters; stays readable after the
/// exporter itself has been moved into a registry.
#[derive(Clone)]
pub struct ScrapeStats {
    total_scrapes: IntCounter,
    scrape_errors: IntCounter,
}

impl ScrapeStats {
    pub fn outcome(&self) -> ScrapeOutcome {
        ScrapeOutcome {
            attempted: self.total_scrapes.get(),
            failed: self.scrape_errors.get(),
        }
    }
}

/// Rows published by one successful cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub downstream: usize,
    pub upstream: usize,
}

pub struct Exporter<F> {
    fetcher: F,
    page: PageScanner,

    // Held from fetch through exposition; overlapping collects queue here.
    mu: Mutex<()>,

    // Exporter metrics.
    stats: ScrapeStats,

    // Downstream metrics.
    ds_channel_snr: GaugeVec,
    ds_channel_power: GaugeVec,
    ds_channel_correctable_errs: CounterVec,
    ds_channel_uncorrectable_errs: CounterVec,

    // Upstream metrics.
    us_channel_power: GaugeVec,
    us_channel_symbol_rate: GaugeVec,
}

fn channel_opts(subsystem: &str, name: &str, help: &str) -> Opts {
    Opts::new(name, help).namespace(NAMESPACE).subsystem(subsystem)
}

impl<F: Fetch> Exporter<F> {
    pub fn new(fetcher: F, spec: ModemSpec) -> Result<Self> {
        Ok(Self {
            fetcher,
            page: PageScanner::new(spec)?,
            mu: Mutex::new(()),

            stats: ScrapeStats {
                total_scrapes: IntCounter::with_opts(
                    Opts::new("status_scrapes_total", "Total number of scrapes of the modem status page.")
                        .namespace(NAMESPACE),
                )?,
                scrape_errors: IntCounter::with_opts(
                    Opts::new("status_scrape_errors_total", "Total number of failed scrapes of the modem status page.")
                        .namespace(NAMESPACE),
                )?,
            },

            ds_channel_snr: GaugeVec::new(
                channel_opts("downstream_channel", "snr_db", "Downstream channel signal to noise ratio in dB."),
                &DS_LABELS,
            )?,
            ds_channel_power: GaugeVec::new(
                channel_opts("downstream_channel", "power_dbmv", "Downstream channel power in dBmV."),
                &DS_LABELS,
            )?,
            ds_channel_correctable_errs: CounterVec::new(
                channel_opts("downstream_channel", "correctable_errors_total", "Downstream channel correctable errors."),
                &DS_LABELS,
            )?,
            ds_channel_uncorrectable_errs: CounterVec::new(
                channel_opts("downstream_channel", "uncorrectable_errors_total", "Downstream channel uncorrectable errors."),
                &DS_LABELS,
            )?,

            us_channel_power: GaugeVec::new(
                channel_opts("upstream_channel", "power_dbmv", "Upstream channel power in dBmV."),
                &US_LABELS,
            )?,
            us_channel_symbol_rate: GaugeVec::new(
                channel_opts("upstream_channel", "symbol_rate", "Upstream channel symbol rate per second."),
                &US_LABELS,
            )?,
        })
    }

    pub fn spec(&self) -> &ModemSpec {
        self.page.spec()
    }

    pub fn outcome(&self) -> ScrapeOutcome {
        self.stats.outcome()
    }

    pub fn stats(&self) -> ScrapeStats {
        self.stats.clone()
    }

    /// Run one cycle under the lock without producing exposition output.
    /// A fetch failure is returned here after being counted and logged.
    pub fn scrape(&self) -> Result<ScrapeSummary> {
        let _guard = self.lock();
        self.cycle()
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guard protects no data, so a panic mid-cycle leaves nothing to repair.
        self.mu.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Caller holds `mu`.
    fn cycle(&self) -> Result<ScrapeSummary> {
        self.stats.total_scrapes.inc();
        self.reset_channels();

        let started = Instant::now();
        let body = self.fetcher.fetch().inspect_err(|e| {
            self.stats.scrape_errors.inc();
            loge!("Scrape: failed to fetch modem status page: {e}");
        })?;

        let doc = Html::parse_document(&body);
        let mut summary = ScrapeSummary::default();

        for r in self.page.downstream(&doc) {
            self.publish_downstream(&r);
            summary.downstream += 1;
        }
        for r in self.page.upstream(&doc) {
            self.publish_upstream(&r);
            summary.upstream += 1;
        }

        if summary.downstream == 0 && summary.upstream == 0 {
            logw!(
                "Scrape: no rows under {:?} or {:?} ({} bytes); wrong status path or page layout?",
                self.page.downstream_selector(),
                self.page.upstream_selector(),
                body.len()
            );
        }
        logd!(
            "Scrape: {} downstream / {} upstream channels in {:?}",
            summary.downstream,
            summary.upstream,
            started.elapsed()
        );
        Ok(summary)
    }

    fn reset_channels(&self) {
        self.ds_channel_snr.reset();
        self.ds_channel_power.reset();
        self.ds_channel_correctable_errs.reset();
        self.ds_channel_uncorrectable_errs.reset();
        self.us_channel_power.reset();
        self.us_channel_symbol_rate.reset();
    }

    fn publish_downstream(&self, r: &DownstreamChannelReading) {
        let labels = r.labels();
        self.ds_channel_snr.with_label_values(&labels).set(r.snr_db);
        self.ds_channel_power.with_label_values(&labels).set(r.power_dbmv);
        set_counter(&self.ds_channel_correctable_errs, &labels, r.correctable_errors);
        set_counter(&self.ds_channel_uncorrectable_errs, &labels, r.uncorrectable_errors);
    }

    fn publish_upstream(&self, r: &UpstreamChannelReading) {
        let labels = r.labels();
        self.us_channel_power.with_label_values(&labels).set(r.power_dbmv);
        self.us_channel_symbol_rate.with_label_values(&labels).set(r.symbol_rate_per_sec);
    }
}

impl<F: Fetch + 'static> Exporter<F> {
    /// Hand the exporter to `registry`; the returned stats keep the
    /// counters readable.
    pub fn register(self, registry: &Registry) -> Result<ScrapeStats> {
        let stats = self.stats();
        registry.register(Box::new(self))?;
        Ok(stats)
    }
}

// The modem reports absolute totals; a counter child takes the latest reading
// instead of accumulating, and can't go negative.
fn set_counter(vec: &CounterVec, labels: &[&str; 5], value: f64) {
    let c = vec.with_label_values(labels);
    c.reset();
    c.inc_by(value.max(0.0));
}

impl<F: Fetch> Collector for Exporter<F> {
    fn desc(&self) -> Vec<&Desc> {
        let mut descs = Vec::with_capacity(8);
        descs.extend(self.stats.total_scrapes.desc());
        descs.extend(self.stats.scrape_errors.desc());
        descs.extend(self.ds_channel_snr.desc());
        descs.extend(self.ds_channel_power.desc());
        descs.extend(self.ds_channel_correctable_errs.desc());
        descs.extend(self.ds_channel_uncorrectable_errs.desc());
        descs.extend(self.us_channel_power.desc());
        descs.extend(self.us_channel_symbol_rate.desc());
        descs
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let _guard = self.lock();
        // Failures are counted and logged inside; the counters still go out.
        let _ = self.cycle();

        let mut mfs = Vec::with_capacity(8);
        mfs.extend(self.stats.total_scrapes.collect());
        mfs.extend(self.stats.scrape_errors.collect());
        mfs.extend(self.ds_channel_snr.collect());
        mfs.extend(self.ds_channel_power.collect());
        mfs.extend(self.ds_channel_correctable_errs.collect());
        mfs.extend(self.ds_channel_uncorrectable_errs.collect());
        mfs.extend(self.us_channel_power.collect());
        mfs.extend(self.us_channel_symbol_rate.collect());
        mfs
    }
}
