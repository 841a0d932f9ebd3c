//! Stats session: drain, aggregate, and guard against stale results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use domain::models::{DashboardStats, DateWindow, DivisionRoster, UpdateStatusRequest};
use domain::services::compute_dashboard_stats;

use crate::api::ApiClient;
use crate::drain::{drain_all, ActivitySource};
use crate::error::ClientError;

/// Lifecycle of one statistics view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready(DashboardStats),
    Error(String),
}

/// Owns the drain/aggregate cycle for one dashboard.
///
/// Every refresh takes a new generation from an atomic counter. A drain
/// whose generation is no longer current when it completes is superseded:
/// its results are discarded and never overwrite a newer drain's state.
pub struct StatsSession<S> {
    source: S,
    roster: DivisionRoster,
    page_size: usize,
    drain_timeout: Duration,
    generation: AtomicU64,
    state: RwLock<LoadState>,
}

impl<S: ActivitySource + Sync> StatsSession<S> {
    pub fn new(
        source: S,
        roster: DivisionRoster,
        page_size: usize,
        drain_timeout: Duration,
    ) -> Self {
        Self {
            source,
            roster,
            page_size,
            drain_timeout,
            generation: AtomicU64::new(0),
            state: RwLock::new(LoadState::Idle),
        }
    }

    /// Current view state.
    pub async fn state(&self) -> LoadState {
        self.state.read().await.clone()
    }

    /// Drains the full activity history and recomputes the dashboard.
    ///
    /// Re-enters `Loading`, then lands in `Ready` or `Error`. Returns
    /// [`ClientError::Superseded`] when a newer refresh started while this
    /// one was in flight; the stale outcome does not touch the state.
    pub async fn refresh(
        &self,
        division: Option<&str>,
        window: &DateWindow,
    ) -> Result<DashboardStats, ClientError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.write().await = LoadState::Loading;
        debug!(generation, division = ?division, "Starting activity refresh");

        let result = drain_all(&self.source, division, self.page_size, self.drain_timeout).await;

        // The generation re-check and the state write must be atomic: both
        // happen under the same write guard.
        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            warn!(generation, "Discarding superseded refresh");
            return Err(ClientError::Superseded);
        }

        match result {
            Ok(records) => {
                let stats = compute_dashboard_stats(&records, &self.roster, window);
                *state = LoadState::Ready(stats.clone());
                Ok(stats)
            }
            Err(err) => {
                *state = LoadState::Error(err.to_string());
                Err(err)
            }
        }
    }
}

impl StatsSession<ApiClient> {
    /// Resolves or rejects a record, then refetches.
    ///
    /// The backend owns the mutation; local state is never patched.
    pub async fn update_status_and_refresh(
        &self,
        id: &str,
        request: &UpdateStatusRequest,
        division: Option<&str>,
        window: &DateWindow,
    ) -> Result<DashboardStats, ClientError> {
        self.source.update_status(id, request).await?;
        self.refresh(division, window).await
    }
}
