//! OIS Daily - Bank of England OIS spot-curve summary
//!
//! Pulls the daily OIS workbook out of the Bank of England yield-curve
//! archive, reads the 2yr / 5yr / 10yr spot rates for the two most recent
//! dates, and reports the day-over-day change in basis points as text and
//! HTML.
//!
//! # Example
//!
//! ```no_run
//! use ois_daily::cli::commands::fetch_snapshot;
//! use ois_daily::report::render_text;
//! use ois_daily::source::Source;
//!
//! let snapshot = fetch_snapshot(&Source::default())?;
//! println!("{}", render_text(&snapshot, chrono::Local::now().naive_local()));
//! # Ok::<(), ois_daily::error::OisError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod notify;
pub mod report;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use error::{OisError, OisResult};
pub use types::{CellValue, OisSnapshot, RateComparison, Tenor};
