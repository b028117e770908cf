//! Tenor column lookup in the maturity header row

use crate::error::{OisError, OisResult};
use crate::types::{CellValue, Tenor, TenorSelection};
use tracing::{debug, warn};

/// Find the column holding each tracked tenor in the maturity header
///
/// Matching is exact numeric equality against the header value in years;
/// text cells never match, even if they read "2". When the same maturity
/// appears more than once the last column wins.
pub fn locate_tenor_columns(header: &[CellValue]) -> OisResult<TenorSelection> {
    let mut found: [Option<usize>; 3] = [None; 3];

    for (idx, cell) in header.iter().enumerate() {
        let Some(years) = cell.as_number() else {
            continue;
        };

        for (slot, tenor) in Tenor::ALL.iter().enumerate() {
            if years == tenor.maturity_years() {
                if let Some(previous) = found[slot] {
                    warn!(
                        tenor = %tenor,
                        previous_column = previous,
                        column = idx,
                        "duplicate maturity column in header, using the later one"
                    );
                }
                found[slot] = Some(idx);
            }
        }
    }

    let missing: Vec<Tenor> = Tenor::ALL
        .iter()
        .zip(found.iter())
        .filter(|(_, col)| col.is_none())
        .map(|(tenor, _)| *tenor)
        .collect();

    match found {
        [Some(two_year), Some(five_year), Some(ten_year)] => {
            debug!(two_year, five_year, ten_year, "resolved tenor columns");
            Ok(TenorSelection {
                two_year,
                five_year,
                ten_year,
            })
        }
        _ => Err(OisError::ColumnNotFound { missing }),
    }
}
