// src/engine/fields.rs
// Cell value parsing and unit normalization.
//
// Best-effort by contract: a cell that doesn't look like "<float> <unit>"
// reads as 0.0. Callers never see an error from here.

use std::sync::LazyLock;

use regex::Regex;

// <float> [whitespace] <rest>; the exponent only counts when digits follow it.
static UNIT_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*(.*)$").expect("Invalid unit value regex")
});

/// Leading float of `text` when the remainder (after optional whitespace) is
/// exactly `unit`. Pass `""` for a bare number. Anything else is 0.0.
pub fn parse_unit_value(text: &str, unit: &str) -> f64 {
    match split_number(text.trim()) {
        Some((number, rest)) if rest == unit => number.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn split_number(text: &str) -> Option<(&str, &str)> {
    let caps = UNIT_VALUE.captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Hz → "602.00 MHz"
pub fn format_mhz(hz: f64) -> String {
    format!("{:.2} MHz", hz / 1e6)
}

/// Ksym/sec → sym/sec
pub fn ksym_to_sym(ksym_per_sec: f64) -> f64 {
    ksym_per_sec * 1000.0
}
