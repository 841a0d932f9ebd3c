//! Domain services for Traffic Buddy stats.
//!
//! Services contain the pure aggregation logic that operates on activity
//! records. Every function here is deterministic, order-independent, and
//! tolerant of malformed individual records.

pub mod division;
pub mod resolution_time;
pub mod stats;
pub mod status_type;
pub mod time_series;

pub use division::{group_by_division, DivisionGroups};
pub use resolution_time::average_resolution_times;
pub use stats::compute_dashboard_stats;
pub use status_type::{aggregate_status_types, StatusTypeAggregate};
pub use time_series::resolved_percentage_series;
