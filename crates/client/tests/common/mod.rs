//! Shared helpers for client integration tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use client::{ActivitySource, ClientError};
use domain::models::ActivityRecord;
use shared::pagination::PageRequest;

/// Serves a fixed script of page results, in order.
pub struct ScriptedBackend {
    pages: Mutex<Vec<Result<Vec<ActivityRecord>, ClientError>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedBackend {
    pub fn new(pages: Vec<Result<Vec<ActivityRecord>, ClientError>>) -> Self {
        let mut pages = pages;
        pages.reverse();
        Self {
            pages: Mutex::new(pages),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivitySource for ScriptedBackend {
    async fn fetch_page(
        &self,
        _division: Option<&str>,
        request: PageRequest,
    ) -> Result<Vec<ActivityRecord>, ClientError> {
        self.requests.lock().unwrap().push(request);
        self.pages
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn march(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
}

/// A record created on the given March 2025 day.
pub fn test_record(id: &str, status: &str, division: &str, day: u32) -> ActivityRecord {
    ActivityRecord {
        id: id.into(),
        status: Some(status.into()),
        division_name: Some(division.into()),
        query_type: Some("Road Damage".into()),
        timestamp: Some(march(day, 9)),
        ..Default::default()
    }
}

/// A resolved record with a known resolution duration in hours.
pub fn resolved_record(id: &str, division: &str, day: u32, hours: i64) -> ActivityRecord {
    let created = march(day, 8);
    ActivityRecord {
        id: id.into(),
        status: Some("Resolved".into()),
        division_name: Some(division.into()),
        query_type: Some("Traffic Signal Issue".into()),
        timestamp: Some(created),
        resolved_at: Some(created + chrono::Duration::hours(hours)),
        ..Default::default()
    }
}
