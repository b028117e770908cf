//! Day-over-day rate changes

use crate::types::{ObservationRow, OisSnapshot, RateComparison, TenorSelection};
use std::collections::BTreeMap;

/// Source rates are in percent; one percentage point is 100 basis points
pub const BPS_PER_PERCENTAGE_POINT: f64 = 100.0;

/// Change in basis points, or `None` unless both rates are present
///
/// No rounding here; that is left to the renderers.
pub fn compute_change(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(current), Some(previous)) => Some((current - previous) * BPS_PER_PERCENTAGE_POINT),
        _ => None,
    }
}

/// Compare the latest observation against the previous one for every tenor
pub fn compare_observations(
    latest: &ObservationRow,
    previous: &ObservationRow,
    selection: &TenorSelection,
) -> OisSnapshot {
    let rates = selection
        .iter()
        .map(|(tenor, col)| {
            let current = latest.rate(col);
            let prior = previous.rate(col);
            (
                tenor,
                RateComparison {
                    current,
                    previous: prior,
                    change_bps: compute_change(current, prior),
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    OisSnapshot {
        latest_date: latest.date,
        previous_date: previous.date,
        rates,
    }
}
