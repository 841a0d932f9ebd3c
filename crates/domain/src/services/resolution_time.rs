//! Per-division average resolution latency.

use crate::models::stats::ResolutionTimeSummary;

use super::division::DivisionGroups;

/// Computes the average time-to-resolution per present division.
///
/// A record is eligible when it has both a creation and a completion
/// timestamp and the duration is non-negative; see
/// [`ActivityRecord::resolution_hours`](crate::models::ActivityRecord::resolution_hours).
/// Divisions in the grouped set with no eligible records report 0, they are
/// never omitted. Averages are rounded to 2 decimal places.
pub fn average_resolution_times(groups: &DivisionGroups<'_>) -> Vec<ResolutionTimeSummary> {
    groups
        .iter()
        .map(|(division, records)| {
            let durations: Vec<f64> = records
                .iter()
                .filter_map(|record| record.resolution_hours())
                .collect();

            let average_hours = if durations.is_empty() {
                0.0
            } else {
                round2(durations.iter().sum::<f64>() / durations.len() as f64)
            };

            ResolutionTimeSummary {
                division_name: division.to_string(),
                average_hours,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
