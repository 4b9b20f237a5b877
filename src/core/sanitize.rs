// src/core/sanitize.rs

use scraper::ElementRef;

/// All text nodes under a cell, concatenated and trimmed.
/// `&nbsp;` arrives as U+00A0 and is trimmed like any other whitespace.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    let text: String = cell.text().collect();
    text.trim().to_string()
}
