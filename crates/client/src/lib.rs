//! Backend REST client for Traffic Buddy stats.
//!
//! This crate contains:
//! - A typed reqwest client for the dashboard and query endpoints
//! - The paginated drain that fetches the complete activity history
//! - A stats session that guards against stale drains overwriting newer ones

pub mod api;
pub mod drain;
pub mod error;
pub mod session;

pub use api::{ApiClient, QueriesPage, QueryFilter, ServerStatistics};
pub use drain::{drain_all, ActivitySource};
pub use error::ClientError;
pub use session::{LoadState, StatsSession};
