// tests/exporter_scrape.rs
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use netgear_cm_exporter::core::Fetch;
use netgear_cm_exporter::specs::NETGEAR_CM;
use netgear_cm_exporter::{Error, Exporter, Result, ScrapeOutcome, server};
use prometheus::Registry;

const PAGE: &str = include_str!("fixtures/DocsisStatus.htm");

/// Hands out queued responses in order; the last one repeats.
struct Scripted {
    queue: Mutex<VecDeque<std::result::Result<String, String>>>,
}

impl Scripted {
    fn new(steps: Vec<std::result::Result<&str, &str>>) -> Self {
        let queue = steps.into_iter().map(|s| s.map(str::to_string).map_err(str::to_string)).collect();
        Self { queue: Mutex::new(queue) }
    }
}

impl Fetch for Scripted {
    fn fetch(&self) -> Result<String> {
        let mut q = self.queue.lock().unwrap();
        let step = if q.len() > 1 { q.pop_front().unwrap() } else { q.front().cloned().unwrap() };
        step.map_err(Error::Config)
    }
}

/// Value of the first sample of `name` carrying every `key="value"` pair.
fn sample(text: &str, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
    text.lines()
        .filter(|l| !l.starts_with('#'))
        .filter(|l| l.starts_with(name) && matches!(l.as_bytes().get(name.len()), Some(b'{' | b' ')))
        .find(|l| labels.iter().all(|(k, v)| l.contains(&format!("{k}=\"{v}\""))))
        .and_then(|l| l.rsplit(' ').next())
        .and_then(|v| v.parse().ok())
}

fn registry_with(fetch: Scripted) -> (Registry, netgear_cm_exporter::ScrapeStats) {
    let registry = Registry::new();
    let stats = Exporter::new(fetch, NETGEAR_CM).unwrap().register(&registry).unwrap();
    (registry, stats)
}

#[test]
fn successful_scrape_publishes_every_family() {
    let (registry, stats) = registry_with(Scripted::new(vec![Ok(PAGE)]));
    let text = server::encode(&registry).unwrap();

    assert_eq!(stats.outcome(), ScrapeOutcome { attempted: 1, failed: 0 });
    assert_eq!(sample(&text, "netgear_cm_status_scrapes_total", &[]), Some(1.0));
    assert_eq!(sample(&text, "netgear_cm_status_scrape_errors_total", &[]), Some(0.0));

    let ch1 = [("channel", "1"), ("channel_id", "5"), ("frequency", "602.00 MHz"), ("lock_status", "Locked"), ("modulation", "QAM256")];
    assert_eq!(sample(&text, "netgear_cm_downstream_channel_snr_db", &ch1), Some(38.5));
    assert_eq!(sample(&text, "netgear_cm_downstream_channel_power_dbmv", &ch1), Some(0.6));
    assert_eq!(sample(&text, "netgear_cm_downstream_channel_correctable_errors_total", &ch1), Some(15.0));
    assert_eq!(sample(&text, "netgear_cm_downstream_channel_uncorrectable_errors_total", &ch1), Some(0.0));

    let us1 = [("channel", "1"), ("channel_type", "ATDMA"), ("frequency", "39.01 MHz")];
    assert_eq!(sample(&text, "netgear_cm_upstream_channel_symbol_rate", &us1), Some(5_120_000.0));
    assert_eq!(sample(&text, "netgear_cm_upstream_channel_power_dbmv", &us1), Some(41.0));
}

#[test]
fn failed_fetch_counts_an_error_and_drops_channel_readings() {
    let (registry, stats) = registry_with(Scripted::new(vec![Ok(PAGE), Err("connection refused")]));

    let first = server::encode(&registry).unwrap();
    assert!(first.contains("netgear_cm_downstream_channel_snr_db"));

    let second = server::encode(&registry).unwrap();
    assert_eq!(stats.outcome(), ScrapeOutcome { attempted: 2, failed: 1 });
    assert_eq!(sample(&second, "netgear_cm_status_scrapes_total", &[]), Some(2.0));
    assert_eq!(sample(&second, "netgear_cm_status_scrape_errors_total", &[]), Some(1.0));
    assert!(!second.contains("netgear_cm_downstream_channel"));
    assert!(!second.contains("netgear_cm_upstream_channel"));
}

#[test]
fn scrape_reports_row_counts_and_propagates_fetch_errors() {
    let exporter = Exporter::new(Scripted::new(vec![Ok(PAGE), Err("timeout")]), NETGEAR_CM).unwrap();

    let summary = exporter.scrape().unwrap();
    assert_eq!((summary.downstream, summary.upstream), (4, 3));

    assert!(exporter.scrape().is_err());
    assert_eq!(exporter.outcome(), ScrapeOutcome { attempted: 2, failed: 1 });
}

#[test]
fn page_without_tables_is_a_success_with_no_channels() {
    let (registry, stats) = registry_with(Scripted::new(vec![Ok("<html><body>maintenance</body></html>")]));
    let text = server::encode(&registry).unwrap();

    assert_eq!(stats.outcome(), ScrapeOutcome { attempted: 1, failed: 0 });
    assert!(!text.contains("netgear_cm_downstream_channel"));
}

#[test]
fn vanished_channels_leave_the_exposition() {
    let one_row = PAGE.replacen("<td>2</td>", "<td>two</td>", 1);
    let (registry, _) = registry_with(Scripted::new(vec![Ok(PAGE), Ok(one_row.as_str())]));

    let first = server::encode(&registry).unwrap();
    assert!(sample(&first, "netgear_cm_downstream_channel_snr_db", &[("channel", "2")]).is_some());

    let second = server::encode(&registry).unwrap();
    assert!(sample(&second, "netgear_cm_downstream_channel_snr_db", &[("channel", "2")]).is_none());
    assert!(sample(&second, "netgear_cm_downstream_channel_snr_db", &[("channel", "two")]).is_some());
}

/// Records fetch entry/exit so overlapping cycles would show up interleaved.
struct Slow {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl Fetch for Slow {
    fn fetch(&self) -> Result<String> {
        self.events.lock().unwrap().push("start");
        thread::sleep(Duration::from_millis(50));
        self.events.lock().unwrap().push("end");
        Ok(PAGE.to_string())
    }
}

#[test]
fn concurrent_collects_run_one_cycle_at_a_time() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let registry = Arc::new(Registry::new());
    let stats = Exporter::new(Slow { events: Arc::clone(&events) }, NETGEAR_CM)
        .unwrap()
        .register(&registry)
        .unwrap();

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let r = Arc::clone(&registry);
            thread::spawn(move || server::encode(&r).unwrap())
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(*events.lock().unwrap(), ["start", "end", "start", "end"]);
    assert_eq!(stats.outcome(), ScrapeOutcome { attempted: 2, failed: 0 });
}
