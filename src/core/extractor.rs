//! Dated observation rows from the data block of the sheet

use crate::error::{OisError, OisResult};
use crate::excel::layout::DATE_COLUMN;
use crate::types::{cell_at, ObservationRow, Row, TenorSelection};
use std::collections::BTreeMap;
use tracing::debug;

/// Collect every dated row, newest first
///
/// Rows whose first cell is not a date (blank lines, notes, footers) are
/// skipped. Rates are carried as found: blank or non-numeric cells become
/// `None`. Rows sharing a date keep their sheet order.
pub fn extract_observations(
    rows: &[Row],
    selection: &TenorSelection,
) -> OisResult<Vec<ObservationRow>> {
    let mut observations: Vec<ObservationRow> = rows
        .iter()
        .filter_map(|row| {
            let date = cell_at(row, DATE_COLUMN).as_date()?;
            let values = selection
                .iter()
                .map(|(_, col)| (col, cell_at(row, col).as_number()))
                .collect::<BTreeMap<_, _>>();
            Some(ObservationRow { date, values })
        })
        .collect();

    debug!(
        rows = rows.len(),
        observations = observations.len(),
        "extracted dated rows"
    );

    if observations.len() < 2 {
        return Err(OisError::InsufficientData {
            found: observations.len(),
        });
    }

    // Stable: equal dates stay in sheet order
    observations.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(observations)
}
