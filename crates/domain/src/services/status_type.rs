//! Single-pass status and category aggregation.

use crate::models::activity::{ActivityRecord, QueryType};
use crate::models::stats::{StatusCounts, TypeCounts};

/// Result of one status/type aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTypeAggregate {
    pub by_status: StatusCounts,
    pub by_type: TypeCounts,
    /// Full input length. Category counts may undercount when labels fall
    /// outside the canonical list; status counts never do.
    pub total: u64,
}

/// Reduces a record collection into status and category counts in one pass.
///
/// Status classification applies the uniform pending-fallback policy, so the
/// four status counts always sum to `total`. Category labels are matched
/// against the explicit canonical table; anything else is dropped from
/// `by_type` but still counts toward `total`.
pub fn aggregate_status_types(records: &[ActivityRecord]) -> StatusTypeAggregate {
    let mut aggregate = StatusTypeAggregate {
        total: records.len() as u64,
        ..Default::default()
    };

    for record in records {
        aggregate.by_status.increment(record.classified_status());

        if let Some(query_type) = record.query_type.as_deref().and_then(QueryType::from_label) {
            aggregate.by_type.increment(query_type);
        }
    }

    aggregate
}
