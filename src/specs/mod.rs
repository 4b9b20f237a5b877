// src/specs/mod.rs
//! # Modem page specs
//!
//! Where the channel tables live on a modem's DOCSIS status page and what each
//! column position means.
//!
//! Column position is the only dispatch key; header text is never matched.
//! That is a hard structural assumption about the page, and it is the first
//! thing to break on a new modem model. Supporting one means adding a
//! [`ModemSpec`] with its own column tables, not touching the extractors.
//!
//! ## Conventions & invariants
//! - The first `<tr>` of each table body is the header and is always skipped.
//! - Label cells are taken verbatim, trimmed.
//! - A numeric cell that doesn't match its unit reads as 0; the row is kept.
//!
//! ## Typical call chain
//! ```text
//! exporter::Exporter::collect → Fetch::fetch → Html::parse_document
//!     → downstream::readings / upstream::readings → metric families
//! ```
pub mod downstream;
pub mod upstream;

use scraper::Html;

use crate::engine::{TableScanner, TableSpec};
use crate::error::Result;
use downstream::{DownstreamChannelReading, DsColumn};
use upstream::{UpstreamChannelReading, UsColumn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModemSpec {
    pub name: &'static str,
    pub downstream: TableSpec<DsColumn>,
    pub upstream: TableSpec<UsColumn>,
}

/// NETGEAR DocsisStatus page (CM400/CM500/CM600 family, .asp and .htm firmware).
pub const NETGEAR_CM: ModemSpec = ModemSpec {
    name: "netgear-cm",
    downstream: TableSpec { selector: "#dsTable tbody", columns: &downstream::DEFAULT_COLUMNS },
    upstream: TableSpec { selector: "#usTable tbody", columns: &upstream::DEFAULT_COLUMNS },
};

/// Parsed selectors for one [`ModemSpec`], built once and reused every scrape.
#[derive(Debug)]
pub struct PageScanner {
    spec: ModemSpec,
    downstream: TableScanner,
    upstream: TableScanner,
}

impl PageScanner {
    pub fn new(spec: ModemSpec) -> Result<Self> {
        Ok(Self {
            downstream: TableScanner::new(spec.downstream.selector)?,
            upstream: TableScanner::new(spec.upstream.selector)?,
            spec,
        })
    }

    pub fn spec(&self) -> &ModemSpec {
        &self.spec
    }

    pub fn downstream_selector(&self) -> &str {
        self.downstream.selector()
    }

    pub fn upstream_selector(&self) -> &str {
        self.upstream.selector()
    }

    pub fn downstream<'a>(&'a self, doc: &'a Html) -> impl Iterator<Item = DownstreamChannelReading> + 'a {
        downstream::readings(doc, &self.downstream, &self.spec.downstream)
    }

    pub fn upstream<'a>(&'a self, doc: &'a Html) -> impl Iterator<Item = UpstreamChannelReading> + 'a {
        upstream::readings(doc, &self.upstream, &self.spec.upstream)
    }
}

/// Everything on one status page, collected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusPage {
    pub downstream: Vec<DownstreamChannelReading>,
    pub upstream: Vec<UpstreamChannelReading>,
}

/// Split out for tests and benches: parse a whole page without a fetch.
pub fn parse_status_page(html: &str, spec: ModemSpec) -> Result<StatusPage> {
    let scanner = PageScanner::new(spec)?;
    let doc = Html::parse_document(html);
    Ok(StatusPage {
        downstream: scanner.downstream(&doc).collect(),
        upstream: scanner.upstream(&doc).collect(),
    })
}
