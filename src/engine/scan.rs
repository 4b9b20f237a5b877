// src/engine/scan.rs
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::cell_text;
use crate::error::{Error, Result};

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static row selector"));
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("static cell selector"));

/// Walks the rows of one table body. The first row of each matched body is
/// the header and is always skipped, whatever it contains.
#[derive(Debug)]
pub struct TableScanner {
    selector: String,
    body: Selector,
}

impl TableScanner {
    pub fn new(selector: &str) -> Result<Self> {
        let body = Selector::parse(selector).map_err(|e| Error::Selector {
            selector: s!(selector),
            reason: format!("{e:?}"),
        })?;
        Ok(Self { selector: s!(selector), body })
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Lazily yields the trimmed `<td>` texts of every data row, in document
    /// order. A missing table yields nothing.
    pub fn rows<'a>(&'a self, doc: &'a Html) -> impl Iterator<Item = Vec<String>> + 'a {
        doc.select(&self.body)
            .flat_map(|body| body.select(&ROW).skip(1))
            .map(row_cells)
    }
}

fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELL).map(cell_text).collect()
}
