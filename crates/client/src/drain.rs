//! Paginated drain of the activity history.
//!
//! Downstream aggregation needs the complete record set, not one page, so
//! the drain walks the paginated endpoint until the first short page. Pages
//! are requested sequentially; volumes on this admin read path do not
//! justify pipelining.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use domain::models::ActivityRecord;
use shared::pagination::PageRequest;

use crate::error::ClientError;

/// Capability to fetch one page of activity records.
#[async_trait]
pub trait ActivitySource {
    async fn fetch_page(
        &self,
        division: Option<&str>,
        request: PageRequest,
    ) -> Result<Vec<ActivityRecord>, ClientError>;
}

/// Drains every page of the activity feed into one collection.
///
/// Starts at page 1 and keeps requesting while pages come back full; the
/// first short page (including an empty one) terminates the loop. When the
/// total is an exact multiple of the page size this costs one extra request
/// that returns an empty page, which is expected.
///
/// Any single page failure aborts the whole drain; partial results are
/// discarded by the caller. A `total_timeout` bounds the whole walk and
/// surfaces a retryable [`ClientError::DrainTimeout`].
pub async fn drain_all<S>(
    source: &S,
    division: Option<&str>,
    page_size: usize,
    total_timeout: Duration,
) -> Result<Vec<ActivityRecord>, ClientError>
where
    S: ActivitySource + Sync + ?Sized,
{
    let started = Instant::now();
    let mut request = PageRequest::first(page_size)?;
    let mut all_records = Vec::new();

    loop {
        if started.elapsed() > total_timeout {
            return Err(ClientError::DrainTimeout(total_timeout.as_secs()));
        }

        let page = source.fetch_page(division, request).await?;
        let returned = page.len();
        all_records.extend(page);

        debug!(
            page = request.page,
            returned,
            accumulated = all_records.len(),
            "Drained activity page"
        );

        if request.is_last_page(returned) {
            return Ok(all_records);
        }
        request = request.next();
    }
}
