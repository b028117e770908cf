//! Rendering of an [`OisSnapshot`] for people
//!
//! - `text`: console / plain-text email body
//! - `html`: HTML email body
//!
//! Both renderers share the direction policy below: a change is up, down, or
//! neutral, and an absent change is neutral.

pub mod html;
pub mod text;

pub use html::render_html;
pub use text::render_text;

use crate::types::OisSnapshot;
use chrono::NaiveDate;

/// Attribution line shown under every summary
pub const DATA_SOURCE: &str = "Bank of England";

/// Placeholder for a missing rate or change
pub const NOT_AVAILABLE: &str = "N/A";

/// Direction of a day-over-day change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl Direction {
    pub fn of(change_bps: Option<f64>) -> Self {
        match change_bps {
            Some(c) if c > 0.0 => Direction::Up,
            Some(c) if c < 0.0 => Direction::Down,
            _ => Direction::Neutral,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Neutral => "→",
        }
    }

    /// CSS class used by the HTML body
    pub fn css_class(self) -> &'static str {
        match self {
            Direction::Up => "positive",
            Direction::Down => "negative",
            Direction::Neutral => "neutral",
        }
    }
}

/// `10 June 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Email subject for a snapshot
pub fn subject(snapshot: &OisSnapshot) -> String {
    format!("OIS Rates - {}", format_long_date(snapshot.latest_date))
}
