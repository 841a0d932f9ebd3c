//! Typed client for the Traffic Buddy backend REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};
use validator::Validate;

use domain::models::{ActivityRecord, UpdateStatusRequest};
use shared::pagination::PageRequest;

use crate::drain::ActivitySource;
use crate::error::ClientError;

/// Optional narrowing of the queries listing.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    pub division: Option<String>,
    pub status: Option<String>,
    pub query_type: Option<String>,
}

/// One page of the queries listing.
#[derive(Debug, Clone)]
pub struct QueriesPage {
    pub records: Vec<ActivityRecord>,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Server-computed statistics baseline (unfiltered).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStatistics {
    #[serde(rename = "byStatus")]
    pub by_status: WireStatusCounts,
    #[serde(rename = "byType")]
    pub by_type: WireTypeCounts,
    pub total: u64,
}

/// Status counts as the backend spells them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireStatusCounts {
    #[serde(default)]
    pub pending: u64,
    #[serde(rename = "inProgress", default)]
    pub in_progress: u64,
    #[serde(default)]
    pub resolved: u64,
    #[serde(default)]
    pub rejected: u64,
}

/// Category counts as the backend spells them.
///
/// The signal-issue key really is all lowercase on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireTypeCounts {
    #[serde(rename = "trafficViolation", default)]
    pub traffic_violation: u64,
    #[serde(rename = "trafficCongestion", default)]
    pub traffic_congestion: u64,
    #[serde(default)]
    pub irregularity: u64,
    #[serde(rename = "roadDamage", default)]
    pub road_damage: u64,
    #[serde(rename = "illegalParking", default)]
    pub illegal_parking: u64,
    #[serde(rename = "trafficsignalissue", default)]
    pub traffic_signal_issue: u64,
    #[serde(default)]
    pub suggestion: u64,
    #[serde(rename = "generalReport", default)]
    pub general_report: u64,
}

/// `GET /api/dashboard/summary` payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "queriesPerDay", default)]
    pub queries_per_day: Vec<DayCount>,
    #[serde(rename = "queryTypes", default)]
    pub query_types: Vec<LabelCount>,
    #[serde(rename = "queryStatus", default)]
    pub query_status: WireStatusCounts,
    #[serde(rename = "totalQueries", default)]
    pub total_queries: u64,
}

/// One per-day count from the summary endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DayCount {
    #[serde(rename = "_id")]
    pub date: String,
    pub count: u64,
}

/// One per-category count from the summary endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelCount {
    #[serde(rename = "_id")]
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T: Default> {
    #[serde(default)]
    data: T,
}

#[derive(Debug, Deserialize)]
struct QueriesResponse {
    #[serde(default)]
    data: Vec<ActivityRecord>,
    #[serde(rename = "totalPages", default)]
    total_pages: u32,
    #[serde(rename = "currentPage", default)]
    current_page: u32,
}

#[derive(Debug, Deserialize)]
struct StatisticsResponse {
    stats: ServerStatistics,
}

/// Client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl ApiClient {
    /// Creates a client with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms: timeout.as_millis() as u64,
        })
    }

    /// `GET /api/dashboard/recent-activity` — one page of the activity feed.
    pub async fn recent_activity_page(
        &self,
        division: Option<&str>,
        request: PageRequest,
    ) -> Result<Vec<ActivityRecord>, ClientError> {
        let mut query = vec![
            ("limit", request.limit.to_string()),
            ("page", request.page.to_string()),
        ];
        if let Some(division) = division {
            query.push(("division", division.to_string()));
        }

        let envelope: DataEnvelope<Vec<ActivityRecord>> = self
            .get_json("/api/dashboard/recent-activity", &query)
            .await?;
        Ok(envelope.data)
    }

    /// `GET /api/dashboard/summary` — headline dashboard numbers.
    pub async fn dashboard_summary(
        &self,
        division: Option<&str>,
    ) -> Result<DashboardSummary, ClientError> {
        let mut query = Vec::new();
        if let Some(division) = division {
            query.push(("division", division.to_string()));
        }

        let envelope: DataEnvelope<DashboardSummary> =
            self.get_json("/api/dashboard/summary", &query).await?;
        Ok(envelope.data)
    }

    /// `GET /api/queries` — one page of the interactive listing.
    pub async fn queries_page(
        &self,
        filter: &QueryFilter,
        request: PageRequest,
    ) -> Result<QueriesPage, ClientError> {
        let mut query = vec![
            ("page", request.page.to_string()),
            ("limit", request.limit.to_string()),
        ];
        if let Some(division) = &filter.division {
            query.push(("division", division.clone()));
        }
        if let Some(status) = &filter.status {
            query.push(("status", status.clone()));
        }
        if let Some(query_type) = &filter.query_type {
            query.push(("query_type", query_type.clone()));
        }

        let response: QueriesResponse = self.get_json("/api/queries", &query).await?;
        Ok(QueriesPage {
            records: response.data,
            total_pages: response.total_pages,
            current_page: response.current_page,
        })
    }

    /// `GET /api/queries/statistics` — the server-side baseline.
    pub async fn statistics(&self) -> Result<ServerStatistics, ClientError> {
        let response: StatisticsResponse = self.get_json("/api/queries/statistics", &[]).await?;
        Ok(response.stats)
    }

    /// `PUT /api/queries/:id/status` — resolve or reject a record.
    ///
    /// The caller is expected to refetch afterwards; this client never
    /// patches local state.
    pub async fn update_status(
        &self,
        id: &str,
        request: &UpdateStatusRequest,
    ) -> Result<(), ClientError> {
        request.validate()?;

        let url = format!("{}/api/queries/{}/status", self.base_url, id);
        debug!(url = %url, status = %request.status, "Updating query status");

        let response = self
            .client
            .put(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Status update failed");
            return Err(ClientError::Backend(format!("HTTP {}: {}", status, body)));
        }
        Ok(())
    }

    /// Builds a GET request; query values are percent-encoded by reqwest.
    fn get(&self, path: &str, query: &[(&str, String)]) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        debug!(path, "Calling backend");

        let response = self
            .get(path, query)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, path, "Backend request failed");
            return Err(ClientError::Backend(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    fn map_send_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout_ms)
        } else {
            ClientError::Http(err)
        }
    }
}

#[async_trait]
impl ActivitySource for ApiClient {
    async fn fetch_page(
        &self,
        division: Option<&str>,
        request: PageRequest,
    ) -> Result<Vec<ActivityRecord>, ClientError> {
        self.recent_activity_page(division, request).await
    }
}
