//! Fixed layout of the Bank of England OIS spot-curve workbook
//!
//! The producer has moved rows around between releases before, so every
//! offset lives here and is checked against the actual sheet once, before
//! any rates are read.

use super::SheetGrid;
use crate::error::{OisError, OisResult};
use crate::types::{CellValue, Row};
use tracing::debug;

/// Archive entry holding the daily OIS workbook
pub const OIS_WORKBOOK_ENTRY: &str = "OIS daily data current month.xlsx";

/// Worksheet with the spot curve
pub const SPOT_CURVE_SHEET: &str = "4. spot curve";

/// 1-based sheet row holding the maturities (in years)
pub const MATURITY_HEADER_ROW: usize = 4;

/// 1-based sheet row where dated observations start
pub const FIRST_DATA_ROW: usize = 6;

/// Column holding the observation date
pub const DATE_COLUMN: usize = 0;

/// The two parts of the spot-curve sheet the rate computation consumes
#[derive(Debug, Clone, PartialEq)]
pub struct SpotCurveSheet {
    pub header: Row,
    pub data_rows: Vec<Row>,
}

impl SpotCurveSheet {
    /// Split a decoded sheet into header and data rows, checking the layout
    pub fn from_grid(grid: &SheetGrid) -> OisResult<Self> {
        let header = grid.row(MATURITY_HEADER_ROW).ok_or_else(|| {
            OisError::SheetLayout(format!(
                "sheet has {} rows, expected a maturity header on row {}",
                grid.height(),
                MATURITY_HEADER_ROW
            ))
        })?;

        validate_maturity_header(header)?;

        let data_rows = grid.rows_from(FIRST_DATA_ROW).to_vec();
        debug!(
            header_cells = header.len(),
            data_rows = data_rows.len(),
            "spot curve layout checked"
        );

        Ok(Self {
            header: header.clone(),
            data_rows,
        })
    }
}

/// The first populated cell after the date column must be a maturity number
fn validate_maturity_header(header: &[CellValue]) -> OisResult<()> {
    let first = header
        .iter()
        .enumerate()
        .skip(DATE_COLUMN + 1)
        .find(|(_, cell)| !cell.is_empty());

    match first {
        Some((_, cell)) if cell.as_number().is_some() => Ok(()),
        Some((col, cell)) => Err(OisError::SheetLayout(format!(
            "row {} does not look like a maturity header: column {} holds {:?}",
            MATURITY_HEADER_ROW, col, cell
        ))),
        None => Err(OisError::SheetLayout(format!(
            "row {} is empty, expected maturities in years",
            MATURITY_HEADER_ROW
        ))),
    }
}
