//! Per-date, per-division resolved-percentage series.

use std::collections::{BTreeMap, HashMap};

use crate::models::activity::QueryStatus;
use crate::models::stats::{date_label, DateWindow, SeriesPoint};

use super::division::DivisionGroups;

/// Builds the resolved-percentage series over the given window.
///
/// One point per window date, chronological. Each point carries a value for
/// every division present in the grouped set: resolved/total*100 for that
/// division's records bucketed on that date's month-day label, or exactly 0
/// when there are none. Records without a creation timestamp are skipped.
pub fn resolved_percentage_series(
    groups: &DivisionGroups<'_>,
    window: &DateWindow,
) -> Vec<SeriesPoint> {
    // (label, division) -> (total, resolved)
    let mut buckets: HashMap<(String, String), (u64, u64)> = HashMap::new();

    for (division, records) in groups.iter() {
        for record in records {
            let Some(created) = record.timestamp else {
                continue;
            };
            let label = date_label(created.date_naive());
            let bucket = buckets.entry((label, division.to_string())).or_insert((0, 0));
            bucket.0 += 1;
            if record.classified_status() == QueryStatus::Resolved {
                bucket.1 += 1;
            }
        }
    }

    window
        .dates()
        .map(|date| {
            let label = date_label(date);
            let mut values = BTreeMap::new();
            for division in groups.division_names() {
                let percentage = match buckets.get(&(label.clone(), division.to_string())) {
                    Some((total, resolved)) if *total > 0 => {
                        (*resolved as f64 / *total as f64) * 100.0
                    }
                    _ => 0.0,
                };
                values.insert(division.to_string(), percentage);
            }
            SeriesPoint {
                date: label,
                values,
            }
        })
        .collect()
}
