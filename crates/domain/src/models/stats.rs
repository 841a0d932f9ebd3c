//! Derived statistics value objects.
//!
//! Everything here is recomputed from scratch on every aggregation pass;
//! nothing is persisted or updated incrementally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::activity::{QueryStatus, QueryType};

/// Error type for date window construction.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("Window start {start} is after end {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

/// An inclusive calendar window for time-bucketed aggregates.
///
/// Always supplied by the caller; there is no built-in default range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// The window covering the `days` days ending at `end` (inclusive).
    pub fn last_days(end: NaiveDate, days: u32) -> Self {
        let span = days.max(1) - 1;
        Self {
            start: end - chrono::Duration::days(i64::from(span)),
            end,
        }
    }

    /// Dates in the window, chronological.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Short month-day chart label, e.g. "Feb 28".
///
/// The year is deliberately discarded, matching the chart axis; records from
/// different years sharing a month and day land in the same bucket.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Counts of records per status. Mutually exclusive; the four counts sum to
/// the number of records processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StatusCounts {
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub rejected: u64,
}

impl StatusCounts {
    pub fn increment(&mut self, status: QueryStatus) {
        match status {
            QueryStatus::Pending => self.pending += 1,
            QueryStatus::InProgress => self.in_progress += 1,
            QueryStatus::Resolved => self.resolved += 1,
            QueryStatus::Rejected => self.rejected += 1,
        }
    }

    pub fn sum(&self) -> u64 {
        self.pending + self.in_progress + self.resolved + self.rejected
    }
}

/// Counts of records per canonical category.
///
/// Labels outside the canonical list are not counted anywhere here, so the
/// sum may be less than the aggregate total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TypeCounts {
    pub traffic_violation: u64,
    pub traffic_congestion: u64,
    pub irregularity: u64,
    pub road_damage: u64,
    pub illegal_parking: u64,
    pub traffic_signal_issue: u64,
    pub suggestion: u64,
    pub general_report: u64,
}

impl TypeCounts {
    pub fn increment(&mut self, query_type: QueryType) {
        match query_type {
            QueryType::TrafficViolation => self.traffic_violation += 1,
            QueryType::TrafficCongestion => self.traffic_congestion += 1,
            QueryType::Irregularity => self.irregularity += 1,
            QueryType::RoadDamage => self.road_damage += 1,
            QueryType::IllegalParking => self.illegal_parking += 1,
            QueryType::TrafficSignalIssue => self.traffic_signal_issue += 1,
            QueryType::Suggestion => self.suggestion += 1,
            QueryType::GeneralReport => self.general_report += 1,
        }
    }

    pub fn get(&self, query_type: QueryType) -> u64 {
        match query_type {
            QueryType::TrafficViolation => self.traffic_violation,
            QueryType::TrafficCongestion => self.traffic_congestion,
            QueryType::Irregularity => self.irregularity,
            QueryType::RoadDamage => self.road_damage,
            QueryType::IllegalParking => self.illegal_parking,
            QueryType::TrafficSignalIssue => self.traffic_signal_issue,
            QueryType::Suggestion => self.suggestion,
            QueryType::GeneralReport => self.general_report,
        }
    }

    pub fn sum(&self) -> u64 {
        self.traffic_violation
            + self.traffic_congestion
            + self.irregularity
            + self.road_damage
            + self.illegal_parking
            + self.traffic_signal_issue
            + self.suggestion
            + self.general_report
    }
}

/// Per-division status breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DivisionSummary {
    pub division_name: String,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub rejected: u64,
}

impl DivisionSummary {
    pub fn total(&self) -> u64 {
        self.pending + self.in_progress + self.resolved + self.rejected
    }
}

/// Per-division average time to resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolutionTimeSummary {
    pub division_name: String,
    /// Mean hours across eligible records, rounded to 2 decimals; 0 when the
    /// division has no eligible records.
    pub average_hours: f64,
}

/// One date's resolved-percentage values, one entry per present division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SeriesPoint {
    /// Month-day label, e.g. "Mar 3".
    pub date: String,
    /// Division name to resolved percentage (0-100; 0 when no records).
    pub values: BTreeMap<String, f64>,
}

/// The composite view-model handed to presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardStats {
    /// Full input length, including records whose category is not canonical.
    pub total: u64,
    pub by_status: StatusCounts,
    pub by_type: TypeCounts,
    pub by_division: Vec<DivisionSummary>,
    pub resolution_times: Vec<ResolutionTimeSummary>,
    pub resolved_series: Vec<SeriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_rejects_inverted_range() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 22).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert!(matches!(
            DateWindow::new(start, end),
            Err(WindowError::StartAfterEnd { .. })
        ));
    }

    #[test]
    fn test_window_dates_inclusive() {
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        )
        .unwrap();
        let labels: Vec<String> = window.dates().map(date_label).collect();
        assert_eq!(labels, vec!["Feb 28", "Mar 1", "Mar 2", "Mar 3"]);
        assert_eq!(window.num_days(), 4);
    }

    #[test]
    fn test_window_single_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let window = DateWindow::new(day, day).unwrap();
        assert_eq!(window.dates().count(), 1);
    }

    #[test]
    fn test_last_days() {
        let end = NaiveDate::from_ymd_opt(2025, 3, 22).unwrap();
        let window = DateWindow::last_days(end, 23);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        assert_eq!(window.end, end);
        assert_eq!(window.num_days(), 23);
    }

    #[test]
    fn test_last_days_zero_clamps_to_one() {
        let end = NaiveDate::from_ymd_opt(2025, 3, 22).unwrap();
        let window = DateWindow::last_days(end, 0);
        assert_eq!(window.num_days(), 1);
    }

    #[test]
    fn test_date_label_no_zero_padding() {
        assert_eq!(
            date_label(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()),
            "Mar 3"
        );
        assert_eq!(
            date_label(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()),
            "Feb 28"
        );
    }

    #[test]
    fn test_date_label_discards_year() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(date_label(a), date_label(b));
    }

    #[test]
    fn test_status_counts_sum() {
        let mut counts = StatusCounts::default();
        counts.increment(QueryStatus::Pending);
        counts.increment(QueryStatus::Resolved);
        counts.increment(QueryStatus::Resolved);
        assert_eq!(counts.sum(), 3);
        assert_eq!(counts.resolved, 2);
    }

    #[test]
    fn test_type_counts_increment_and_get() {
        let mut counts = TypeCounts::default();
        counts.increment(QueryType::RoadDamage);
        counts.increment(QueryType::RoadDamage);
        counts.increment(QueryType::Suggestion);
        assert_eq!(counts.get(QueryType::RoadDamage), 2);
        assert_eq!(counts.get(QueryType::Suggestion), 1);
        assert_eq!(counts.get(QueryType::IllegalParking), 0);
        assert_eq!(counts.sum(), 3);
    }

    #[test]
    fn test_division_summary_total() {
        let summary = DivisionSummary {
            division_name: "Chakan".into(),
            pending: 1,
            in_progress: 2,
            resolved: 3,
            rejected: 4,
        };
        assert_eq!(summary.total(), 10);
    }
}
