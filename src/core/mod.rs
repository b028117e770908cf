//! Rate extraction and change computation
//!
//! Pure, in-memory transformation of one decoded worksheet into an
//! [`OisSnapshot`]: locate the tenor columns in the maturity header, collect
//! the dated rows, and compare the two most recent.

pub mod change;
pub mod extractor;
pub mod locator;

pub use change::{compare_observations, compute_change, BPS_PER_PERCENTAGE_POINT};
pub use extractor::extract_observations;
pub use locator::locate_tenor_columns;

use crate::error::OisResult;
use crate::types::{CellValue, OisSnapshot, Row};

/// Build the day-over-day snapshot from a maturity header and its data rows
pub fn build_snapshot(header: &[CellValue], data_rows: &[Row]) -> OisResult<OisSnapshot> {
    let selection = locate_tenor_columns(header)?;
    let observations = extract_observations(data_rows, &selection)?;

    // extract_observations guarantees at least two rows, newest first
    Ok(compare_observations(
        &observations[0],
        &observations[1],
        &selection,
    ))
}
