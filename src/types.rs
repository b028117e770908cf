use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

//==============================================================================
// Worksheet Cells
//==============================================================================

/// A decoded worksheet cell
///
/// Spreadsheet cells arrive untyped; every consumer goes through the
/// accessors below instead of assuming what a cell holds.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Integer or floating-point cell
    Number(f64),
    /// Date or date-time cell (time of day dropped)
    Date(NaiveDate),
    /// Blank cell, or a position past the end of the row
    Empty,
    /// Anything else (strings, booleans, error cells)
    Text(String),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// One worksheet row, in column order starting at column A
pub type Row = Vec<CellValue>;

/// Cell at `col`, treating positions past the end of a short row as blank
pub fn cell_at(row: &[CellValue], col: usize) -> &CellValue {
    row.get(col).unwrap_or(&CellValue::Empty)
}

//==============================================================================
// Tenors
//==============================================================================

/// Curve maturities tracked by the daily summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tenor {
    #[serde(rename = "2yr")]
    TwoYear,
    #[serde(rename = "5yr")]
    FiveYear,
    #[serde(rename = "10yr")]
    TenYear,
}

impl Tenor {
    /// All tracked tenors, in reporting order
    pub const ALL: [Tenor; 3] = [Tenor::TwoYear, Tenor::FiveYear, Tenor::TenYear];

    pub fn label(self) -> &'static str {
        match self {
            Tenor::TwoYear => "2yr",
            Tenor::FiveYear => "5yr",
            Tenor::TenYear => "10yr",
        }
    }

    /// Header value (in years) that identifies this tenor's column
    pub fn maturity_years(self) -> f64 {
        match self {
            Tenor::TwoYear => 2.0,
            Tenor::FiveYear => 5.0,
            Tenor::TenYear => 10.0,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved worksheet column for every tracked tenor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenorSelection {
    pub two_year: usize,
    pub five_year: usize,
    pub ten_year: usize,
}

impl TenorSelection {
    pub fn column(&self, tenor: Tenor) -> usize {
        match tenor {
            Tenor::TwoYear => self.two_year,
            Tenor::FiveYear => self.five_year,
            Tenor::TenYear => self.ten_year,
        }
    }

    /// (tenor, column) pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Tenor, usize)> + '_ {
        Tenor::ALL.into_iter().map(|t| (t, self.column(t)))
    }
}

//==============================================================================
// Observations and Results
//==============================================================================

/// A data row keyed by a valid date
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRow {
    pub date: NaiveDate,
    /// Rate in percent per selected column; `None` for blank or non-numeric cells
    pub values: BTreeMap<usize, Option<f64>>,
}

impl ObservationRow {
    pub fn rate(&self, column: usize) -> Option<f64> {
        self.values.get(&column).copied().flatten()
    }
}

/// Current vs previous rate for one tenor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateComparison {
    pub current: Option<f64>,
    pub previous: Option<f64>,
    /// Only present when both rates are
    pub change_bps: Option<f64>,
}

/// The two most recent observations, compared tenor by tenor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OisSnapshot {
    pub latest_date: NaiveDate,
    pub previous_date: NaiveDate,
    pub rates: BTreeMap<Tenor, RateComparison>,
}

impl OisSnapshot {
    pub fn rate(&self, tenor: Tenor) -> Option<&RateComparison> {
        self.rates.get(&tenor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_accessors_are_type_checked() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        assert_eq!(CellValue::Number(2.0).as_number(), Some(2.0));
        assert_eq!(CellValue::Number(2.0).as_date(), None);
        assert_eq!(CellValue::Date(date).as_date(), Some(date));
        assert_eq!(CellValue::Date(date).as_number(), None);
        assert_eq!(CellValue::Text("2".to_string()).as_number(), None);
        assert!(CellValue::Empty.is_empty());
    }

    #[test]
    fn test_cell_at_past_end_is_empty() {
        let row = vec![CellValue::Number(1.0)];
        assert_eq!(cell_at(&row, 0), &CellValue::Number(1.0));
        assert_eq!(cell_at(&row, 5), &CellValue::Empty);
    }

    #[test]
    fn test_tenor_order_and_labels() {
        let labels: Vec<&str> = Tenor::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["2yr", "5yr", "10yr"]);
        assert!(Tenor::TwoYear < Tenor::TenYear);
    }

    #[test]
    fn test_snapshot_serializes_tenor_labels() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut rates = BTreeMap::new();
        rates.insert(
            Tenor::TenYear,
            RateComparison {
                current: Some(3.8),
                previous: None,
                change_bps: None,
            },
        );
        let snapshot = OisSnapshot {
            latest_date: date,
            previous_date: date,
            rates,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["latest_date"], "2024-06-10");
        assert_eq!(json["rates"]["10yr"]["current"], 3.8);
        assert!(json["rates"]["10yr"]["change_bps"].is_null());
    }
}
