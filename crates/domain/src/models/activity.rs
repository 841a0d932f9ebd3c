//! Activity record models.
//!
//! An activity record is one citizen-submitted complaint/report as the
//! backend returns it. The wire format is MongoDB-shaped and mixes snake_case
//! and camelCase field names, so renames are explicit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{validate_latitude, validate_longitude, validate_resolution_note};
use validator::Validate;

/// Canonical complaint statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl QueryStatus {
    /// Classifies a raw status string.
    ///
    /// Matching is case-insensitive; "closed" counts as resolved. Anything
    /// unrecognized (including a missing status) classifies as pending, the
    /// one policy applied by every aggregation path.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("in progress") => QueryStatus::InProgress,
            Some("resolved") | Some("closed") => QueryStatus::Resolved,
            Some("rejected") => QueryStatus::Rejected,
            _ => QueryStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Pending => "Pending",
            QueryStatus::InProgress => "In Progress",
            QueryStatus::Resolved => "Resolved",
            QueryStatus::Rejected => "Rejected",
        }
    }
}

/// Canonical complaint categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryType {
    TrafficViolation,
    TrafficCongestion,
    Irregularity,
    RoadDamage,
    IllegalParking,
    TrafficSignalIssue,
    Suggestion,
    GeneralReport,
}

impl QueryType {
    /// Maps a canonical category label to its category.
    ///
    /// A single explicit table, exact match; labels outside it return `None`
    /// and are dropped from typed aggregates.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Traffic Violation" => Some(QueryType::TrafficViolation),
            "Traffic Congestion" => Some(QueryType::TrafficCongestion),
            "Irregularity" => Some(QueryType::Irregularity),
            "Road Damage" => Some(QueryType::RoadDamage),
            "Illegal Parking" => Some(QueryType::IllegalParking),
            "Traffic Signal Issue" => Some(QueryType::TrafficSignalIssue),
            "Suggestion" => Some(QueryType::Suggestion),
            "General Report" => Some(QueryType::GeneralReport),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueryType::TrafficViolation => "Traffic Violation",
            QueryType::TrafficCongestion => "Traffic Congestion",
            QueryType::Irregularity => "Irregularity",
            QueryType::RoadDamage => "Road Damage",
            QueryType::IllegalParking => "Illegal Parking",
            QueryType::TrafficSignalIssue => "Traffic Signal Issue",
            QueryType::Suggestion => "Suggestion",
            QueryType::GeneralReport => "General Report",
        }
    }
}

/// Geographic location attached to a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Location {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_latitude"))]
    pub latitude: Option<f64>,
    #[serde(default)]
    #[validate(custom(function = "validate_longitude"))]
    pub longitude: Option<f64>,
}

/// Reference to a division document when the backend returns the joined
/// relation instead of a flat name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DivisionRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

/// One complaint/query record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub query_type: Option<String>,

    /// Raw status string; classify with [`QueryStatus::classify`].
    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "divisionName", default)]
    pub division_name: Option<String>,

    #[serde(default)]
    pub division: Option<DivisionRef>,

    /// Creation time; records without it are excluded from time-based
    /// aggregates.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub location: Option<Location>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub resolution_note: Option<String>,

    #[serde(default)]
    pub resolver_name: Option<String>,
}

impl ActivityRecord {
    /// The raw division label: flat name, else joined relation id, else
    /// "Unknown". Normalization happens in the division grouper.
    pub fn division_label(&self) -> &str {
        if let Some(name) = self.division_name.as_deref() {
            return name;
        }
        if let Some(id) = self.division.as_ref().and_then(|d| d.id.as_deref()) {
            return id;
        }
        "Unknown"
    }

    /// Classified status.
    pub fn classified_status(&self) -> QueryStatus {
        QueryStatus::classify(self.status.as_deref())
    }

    /// Completion time: `resolved_at` preferred, `updated_at` as fallback.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at.or(self.updated_at)
    }

    /// Time to resolution in hours.
    ///
    /// `Some` only when both timestamps are present and completion does not
    /// precede creation; negative durations are data-entry errors and are
    /// discarded, not floored to zero.
    pub fn resolution_hours(&self) -> Option<f64> {
        let created = self.timestamp?;
        let completed = self.completed_at()?;
        let millis = (completed - created).num_milliseconds();
        if millis < 0 {
            return None;
        }
        Some(millis as f64 / 3_600_000.0)
    }
}

/// Body of `PUT /api/queries/:id/status`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    pub status: String,

    #[validate(custom(function = "validate_resolution_note"))]
    pub resolution_note: String,

    #[validate(length(min = 1, message = "Resolver name must not be empty"))]
    pub resolver_name: String,

    /// Optional base64-encoded proof image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
