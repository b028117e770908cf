//! Excel importer implementation - Excel (.xlsx) bytes → cell grid

use crate::error::{OisError, OisResult};
use crate::types::{CellValue, Row};
use calamine::{Data, Range, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Cursor;
use tracing::debug;

/// Rows of one worksheet, indexed from the top-left corner of the sheet
///
/// `rows[0]` is sheet row 1 and `rows[r][0]` is column A, whatever the
/// used range of the sheet happens to be.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    pub rows: Vec<Row>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Row by 1-based sheet row number
    pub fn row(&self, number: usize) -> Option<&Row> {
        number.checked_sub(1).and_then(|idx| self.rows.get(idx))
    }

    /// Rows from a 1-based sheet row number to the end of the sheet
    pub fn rows_from(&self, number: usize) -> &[Row] {
        let start = number.saturating_sub(1).min(self.rows.len());
        &self.rows[start..]
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Decodes worksheets from an in-memory .xlsx workbook
pub struct WorkbookImporter {
    workbook: Xlsx<Cursor<Vec<u8>>>,
}

impl WorkbookImporter {
    /// Open workbook bytes
    pub fn from_bytes(bytes: Vec<u8>) -> OisResult<Self> {
        let workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| OisError::Workbook(format!("Failed to open Excel data: {}", e)))?;
        Ok(Self { workbook })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Decode one worksheet by name
    pub fn read_sheet(&mut self, sheet_name: &str) -> OisResult<SheetGrid> {
        if !self.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(OisError::SheetNotFound(format!(
                "'{}' (available: {})",
                sheet_name,
                self.sheet_names().join(", ")
            )));
        }

        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| OisError::Workbook(format!("Failed to read '{}': {}", sheet_name, e)))?;

        let grid = range_to_grid(&range);
        debug!(sheet = sheet_name, rows = grid.height(), "decoded worksheet");
        Ok(grid)
    }
}

/// Lay a calamine range out from cell A1, filling gaps with `Empty`
fn range_to_grid(range: &Range<Data>) -> SheetGrid {
    let Some((end_row, end_col)) = range.end() else {
        return SheetGrid::default();
    };

    let rows = (0..=end_row)
        .map(|row| {
            (0..=end_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map(convert_cell)
                        .unwrap_or(CellValue::Empty)
                })
                .collect()
        })
        .collect();

    SheetGrid::new(rows)
}

/// Convert a calamine cell into a [`CellValue`]
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::DateTime(dt) if dt.is_datetime() => match dt.as_datetime() {
            Some(datetime) => CellValue::Date(datetime.date()),
            None => CellValue::Number(dt.as_f64()),
        },
        // Durations are elapsed time, not calendar dates
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => parse_iso_date(s)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::String(s) if s.trim().is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}

/// Parse `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` (strict OOXML date cells)
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}
