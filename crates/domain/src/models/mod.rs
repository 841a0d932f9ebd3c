//! Domain models for Traffic Buddy stats.

pub mod activity;
pub mod division;
pub mod stats;

pub use activity::{ActivityRecord, Location, QueryStatus, QueryType, UpdateStatusRequest};
pub use division::{normalize_division, DivisionRoster};
pub use stats::{
    DashboardStats, DateWindow, DivisionSummary, ResolutionTimeSummary, SeriesPoint, StatusCounts,
    TypeCounts,
};
