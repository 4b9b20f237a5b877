// src/specs/downstream.rs
use scraper::Html;

use crate::engine::fields::{format_mhz, parse_unit_value};
use crate::engine::{TableScanner, TableSpec};

/// Column kinds of the downstream channel table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DsColumn {
    Channel,
    LockStatus,
    Modulation,
    ChannelId,
    Frequency,     // "602000000 Hz"
    Power,         // "0.6 dBmV"
    Snr,           // "38.5 dB"
    Correctable,   // bare count
    Uncorrectable, // bare count
}

/// Stock NETGEAR layout: 9 columns, fixed order.
pub const DEFAULT_COLUMNS: [DsColumn; 9] = [
    DsColumn::Channel,
    DsColumn::LockStatus,
    DsColumn::Modulation,
    DsColumn::ChannelId,
    DsColumn::Frequency,
    DsColumn::Power,
    DsColumn::Snr,
    DsColumn::Correctable,
    DsColumn::Uncorrectable,
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DownstreamChannelReading {
    pub channel: String,
    pub lock_status: String,
    pub modulation: String,
    pub channel_id: String,
    pub frequency_mhz: String,
    pub snr_db: f64,
    pub power_dbmv: f64,
    pub correctable_errors: f64,
    pub uncorrectable_errors: f64,
}

impl DownstreamChannelReading {
    /// Label values in metric label order:
    /// channel, lock_status, modulation, channel_id, frequency.
    pub fn labels(&self) -> [&str; 5] {
        [
            self.channel.as_str(),
            self.lock_status.as_str(),
            self.modulation.as_str(),
            self.channel_id.as_str(),
            self.frequency_mhz.as_str(),
        ]
    }
}

/// One row of cell texts → one reading. Cells past the layout are ignored;
/// missing cells leave their field at the default.
pub fn extract_row(cells: &[String], spec: &TableSpec<DsColumn>) -> DownstreamChannelReading {
    let mut r = DownstreamChannelReading::default();
    for (pos, cell) in cells.iter().enumerate() {
        let Some(col) = spec.column_at(pos) else { break };
        match col {
            DsColumn::Channel       => r.channel = cell.clone(),
            DsColumn::LockStatus    => r.lock_status = cell.clone(),
            DsColumn::Modulation    => r.modulation = cell.clone(),
            DsColumn::ChannelId     => r.channel_id = cell.clone(),
            DsColumn::Frequency     => r.frequency_mhz = format_mhz(parse_unit_value(cell, "Hz")),
            DsColumn::Power         => r.power_dbmv = parse_unit_value(cell, "dBmV"),
            DsColumn::Snr           => r.snr_db = parse_unit_value(cell, "dB"),
            DsColumn::Correctable   => r.correctable_errors = parse_unit_value(cell, ""),
            DsColumn::Uncorrectable => r.uncorrectable_errors = parse_unit_value(cell, ""),
        }
    }
    r
}

pub fn readings<'a>(
    doc: &'a Html,
    scanner: &'a TableScanner,
    spec: &'a TableSpec<DsColumn>,
) -> impl Iterator<Item = DownstreamChannelReading> + 'a {
    scanner.rows(doc).map(move |cells| extract_row(&cells, spec))
}
