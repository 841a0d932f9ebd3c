//! Orchestration: one aggregation pass over the current record set.

use tracing::debug;

use crate::models::activity::ActivityRecord;
use crate::models::division::DivisionRoster;
use crate::models::stats::{DashboardStats, DateWindow, DivisionSummary};

use super::division::{group_by_division, DivisionGroups};
use super::resolution_time::average_resolution_times;
use super::status_type::aggregate_status_types;
use super::time_series::resolved_percentage_series;

/// Recomputes the full dashboard view-model from scratch.
///
/// Invoked whenever the underlying record set changes; never mutates the
/// input and tolerates an empty one (zeroed counts, empty summaries, a
/// zero-valued series).
pub fn compute_dashboard_stats(
    records: &[ActivityRecord],
    roster: &DivisionRoster,
    window: &DateWindow,
) -> DashboardStats {
    let status_types = aggregate_status_types(records);
    let groups = group_by_division(records, roster);

    let stats = DashboardStats {
        total: status_types.total,
        by_status: status_types.by_status,
        by_type: status_types.by_type,
        by_division: division_summaries(&groups),
        resolution_times: average_resolution_times(&groups),
        resolved_series: resolved_percentage_series(&groups, window),
    };

    debug!(
        total = stats.total,
        divisions = stats.by_division.len(),
        series_points = stats.resolved_series.len(),
        "Recomputed dashboard statistics"
    );

    stats
}

/// Per-division status breakdown for the divisions present in the grouped
/// set, sorted by division name.
fn division_summaries(groups: &DivisionGroups<'_>) -> Vec<DivisionSummary> {
    groups
        .iter()
        .map(|(division, records)| {
            let mut summary = DivisionSummary {
                division_name: division.to_string(),
                ..Default::default()
            };
            for record in records {
                match record.classified_status() {
                    crate::models::QueryStatus::Pending => summary.pending += 1,
                    crate::models::QueryStatus::InProgress => summary.in_progress += 1,
                    crate::models::QueryStatus::Resolved => summary.resolved += 1,
                    crate::models::QueryStatus::Rejected => summary.rejected += 1,
                }
            }
            summary
        })
        .collect()
}
