// src/specs/upstream.rs
use scraper::Html;

use crate::engine::fields::{format_mhz, ksym_to_sym, parse_unit_value};
use crate::engine::{TableScanner, TableSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsColumn {
    Channel,
    LockStatus,
    ChannelType,
    ChannelId,
    SymbolRate, // "5120 Ksym/sec"
    Frequency,  // "39008000 Hz"
    Power,      // "41.0 dBmV"
}

pub const DEFAULT_COLUMNS: [UsColumn; 7] = [
    UsColumn::Channel,
    UsColumn::LockStatus,
    UsColumn::ChannelType,
    UsColumn::ChannelId,
    UsColumn::SymbolRate,
    UsColumn::Frequency,
    UsColumn::Power,
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpstreamChannelReading {
    pub channel: String,
    pub lock_status: String,
    pub channel_type: String,
    pub channel_id: String,
    pub frequency_mhz: String,
    pub symbol_rate_per_sec: f64,
    pub power_dbmv: f64,
}

impl UpstreamChannelReading {
    /// channel, lock_status, channel_type, channel_id, frequency
    pub fn labels(&self) -> [&str; 5] {
        [
            self.channel.as_str(),
            self.lock_status.as_str(),
            self.channel_type.as_str(),
            self.channel_id.as_str(),
            self.frequency_mhz.as_str(),
        ]
    }
}

pub fn extract_row(cells: &[String], spec: &TableSpec<UsColumn>) -> UpstreamChannelReading {
    let mut r = UpstreamChannelReading::default();
    for (pos, cell) in cells.iter().enumerate() {
        let Some(col) = spec.column_at(pos) else { break };
        match col {
            UsColumn::Channel     => r.channel = cell.clone(),
            UsColumn::LockStatus  => r.lock_status = cell.clone(),
            UsColumn::ChannelType => r.channel_type = cell.clone(),
            UsColumn::ChannelId   => r.channel_id = cell.clone(),
            UsColumn::SymbolRate  => r.symbol_rate_per_sec = ksym_to_sym(parse_unit_value(cell, "Ksym/sec")),
            UsColumn::Frequency   => r.frequency_mhz = format_mhz(parse_unit_value(cell, "Hz")),
            UsColumn::Power       => r.power_dbmv = parse_unit_value(cell, "dBmV"),
        }
    }
    r
}

pub fn readings<'a>(
    doc: &'a Html,
    scanner: &'a TableScanner,
    spec: &'a TableSpec<UsColumn>,
) -> impl Iterator<Item = UpstreamChannelReading> + 'a {
    scanner.rows(doc).map(move |cells| extract_row(&cells, spec))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: TableSpec<UsColumn> = TableSpec { selector: "#usTable tbody", columns: &DEFAULT_COLUMNS };

    fn cells(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_row() {
        let row = cells(&["1", "Locked", "ATDMA", "1", "5120 Ksym/sec", "39008000 Hz", "41.0 dBmV"]);
        let r = extract_row(&row, &SPEC);
        assert_eq!(r.symbol_rate_per_sec, 5_120_000.0);
        assert_eq!(r.frequency_mhz, "39.01 MHz");
        assert_eq!(r.power_dbmv, 41.0);
        assert_eq!(r.labels(), ["1", "Locked", "ATDMA", "1", "39.01 MHz"]);
    }

    #[test]
    fn wrong_symbol_rate_unit_reads_zero() {
        let row = cells(&["2", "Locked", "ATDMA", "2", "5120 sym/sec", "32800000 Hz", "40.25 dBmV"]);
        let r = extract_row(&row, &SPEC);
        assert_eq!(r.symbol_rate_per_sec, 0.0);
        assert_eq!(r.frequency_mhz, "32.80 MHz");
        assert_eq!(r.power_dbmv, 40.25);
    }

    #[test]
    fn extra_cells_are_ignored() {
        let row = cells(&["1", "Locked", "ATDMA", "1", "5120 Ksym/sec", "39008000 Hz", "41.0 dBmV", "extra"]);
        assert_eq!(extract_row(&row, &SPEC).power_dbmv, 41.0);
    }
}
