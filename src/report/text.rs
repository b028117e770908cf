//! Plain-text summary

use super::{format_long_date, Direction, DATA_SOURCE, NOT_AVAILABLE};
use crate::types::OisSnapshot;
use chrono::NaiveDateTime;
use std::fmt::Write;

const RULE_WIDTH: usize = 50;

/// Signed change with two decimals: `+25.00 bps`, `-5.00 bps`, or `N/A`
pub fn format_change(change_bps: Option<f64>) -> String {
    match change_bps {
        Some(change) => format!("{:+.2} bps", change),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Rate with three decimals, right-aligned: ` 4.500%`
fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:>6.3}%", rate),
        None => format!("{:>7}", NOT_AVAILABLE),
    }
}

/// Render the console / plain-text email summary
pub fn render_text(snapshot: &OisSnapshot, fetched_at: NaiveDateTime) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Bank of England OIS Rates Summary");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out);
    let _ = writeln!(out, "Latest Data: {}", format_long_date(snapshot.latest_date));
    let _ = writeln!(
        out,
        "Previous Data: {}",
        format_long_date(snapshot.previous_date)
    );
    let _ = writeln!(out);

    for (tenor, rate) in &snapshot.rates {
        let _ = writeln!(
            out,
            "{:>4} Rate: {} (was {}) {} {}",
            tenor.label(),
            format_rate(rate.current),
            format_rate(rate.previous),
            Direction::of(rate.change_bps).arrow(),
            format_change(rate.change_bps)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Data source: {}", DATA_SOURCE);
    let _ = writeln!(
        out,
        "Fetched at: {}",
        fetched_at.format("%d %B %Y %H:%M:%S")
    );

    out
}
