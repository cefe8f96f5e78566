// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Attendance
//!
//! Check-in/check-out and the server-computed summaries built on them
//! (monthly summary, effort scores).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

// =============================================================================
// Models
// =============================================================================

/// One attendance day for one employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceRecord {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    #[serde(deserialize_with = "crate::de::id")]
    pub user_id: u64,
    pub user_name: String,
    pub date: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub working_hours: Option<f64>,
    pub status: String,
    pub note: Option<String>,
}

/// Today's state for the current user. Drives the check-in/out button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodayAttendance {
    pub checked_in: bool,
    pub checked_out: bool,
    pub record: Option<AttendanceRecord>,
}

/// Monthly attendance summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceSummary {
    pub month: String,
    pub present_days: u32,
    pub absent_days: u32,
    pub late_days: u32,
    pub leave_days: u32,
    pub total_hours: f64,
}

/// Effort score per employee, computed server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffortScore {
    #[serde(deserialize_with = "crate::de::id")]
    pub user_id: u64,
    pub user_name: String,
    pub score: f64,
    pub visits: u32,
    pub calls: u32,
    pub meetings: u32,
}

/// Attendance list filter.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub user_id: Option<u64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckInRequest {
    pub user_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutRequest {
    pub user_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

// =============================================================================
// Controller
// =============================================================================

pub struct AttendanceApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AttendanceApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List attendance records, optionally filtered by user and date range.
    pub async fn list(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, ApiError> {
        let options = RequestOptions::new()
            .query_opt("user_id", filter.user_id)
            .query_opt("from", filter.from.map(|d| d.format("%Y-%m-%d")))
            .query_opt("to", filter.to.map(|d| d.format("%Y-%m-%d")));

        self.client
            .read("/api/get-attendance", options, Shape::Envelope)
            .await
    }

    pub async fn today(&self, user_id: u64) -> Result<TodayAttendance, ApiError> {
        let options = RequestOptions::new().query("user_id", user_id);
        self.client
            .read("/api/get-today-attendance", options, Shape::Envelope)
            .await
    }

    pub async fn check_in(&self, request: &CheckInRequest) -> Result<AttendanceRecord, ApiError> {
        self.client
            .write("/api/check-in", request, Shape::Envelope)
            .await
    }

    pub async fn check_out(&self, request: &CheckOutRequest) -> Result<AttendanceRecord, ApiError> {
        self.client
            .write("/api/check-out", request, Shape::Envelope)
            .await
    }

    /// Monthly summary; `month` is `YYYY-MM`.
    pub async fn summary(&self, user_id: u64, month: &str) -> Result<AttendanceSummary, ApiError> {
        let options = RequestOptions::new()
            .query("user_id", user_id)
            .query("month", month);

        self.client
            .read("/api/get-attendance-summary", options, Shape::Envelope)
            .await
    }

    /// Effort scores for every employee; the endpoint paginates.
    pub async fn effort_scores(&self, month: &str) -> Result<Vec<EffortScore>, ApiError> {
        let options = RequestOptions::new().query("month", month);
        self.client
            .read("/api/get-effort-score", options, Shape::Nested)
            .await
    }
}
