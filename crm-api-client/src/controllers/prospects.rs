// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Prospects and Leads
//!
//! The CRM pipeline. Stage transitions are validated and recorded by the
//! server; the client only posts the requested stage.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

// =============================================================================
// Models
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Single-line rendering for tables.
    pub fn one_line(&self) -> String {
        [
            Some(self.line1.as_str()),
            self.line2.as_deref(),
            Some(self.city.as_str()),
            Some(self.state.as_str()),
            Some(self.postal_code.as_str()),
            Some(self.country.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// A prospect or lead record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prospect {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub stage: String,
    pub source: Option<String>,
    pub assigned_to: Option<String>,
    pub address: Option<Address>,
    pub is_opportunity: bool,
    pub created_at: Option<String>,
}

/// Create/update form for a prospect.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProspectInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageChangeRequest {
    pub prospect_id: u64,
    pub stage: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// One entry of a prospect's stage history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageChange {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub from_stage: Option<String>,
    pub to_stage: String,
    pub changed_by: Option<String>,
    pub remark: Option<String>,
    pub changed_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowUpInput {
    pub prospect_id: u64,
    pub follow_up_date: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowUp {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    #[serde(deserialize_with = "crate::de::id")]
    pub prospect_id: u64,
    pub follow_up_date: String,
    pub note: String,
}

// =============================================================================
// Controller
// =============================================================================

pub struct ProspectsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProspectsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All prospects. The endpoint returns a paginated object.
    pub async fn list(&self) -> Result<Vec<Prospect>, ApiError> {
        self.client
            .read("/api/get-prospects", RequestOptions::new(), Shape::Nested)
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Prospect, ApiError> {
        self.client
            .read(
                &format!("/api/get-prospect/{id}"),
                RequestOptions::new(),
                Shape::Envelope,
            )
            .await
    }

    pub async fn create(&self, input: &ProspectInput) -> Result<Prospect, ApiError> {
        self.client
            .write("/api/add-prospect", input, Shape::Envelope)
            .await
    }

    pub async fn update(&self, id: u64, input: &ProspectInput) -> Result<Prospect, ApiError> {
        self.client
            .write(&format!("/api/update-prospect/{id}"), input, Shape::Envelope)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Value, ApiError> {
        self.client
            .write(&format!("/api/delete-prospect/{id}"), &json!({}), Shape::Raw)
            .await
    }

    /// Move a prospect to another pipeline stage.
    pub async fn change_stage(&self, request: &StageChangeRequest) -> Result<Prospect, ApiError> {
        self.client
            .write("/api/change-stage", request, Shape::Envelope)
            .await
    }

    pub async fn update_address(&self, id: u64, address: &Address) -> Result<Prospect, ApiError> {
        self.client
            .write(
                &format!("/api/update-prospect-address/{id}"),
                address,
                Shape::Envelope,
            )
            .await
    }

    pub async fn history(&self, id: u64) -> Result<Vec<StageChange>, ApiError> {
        self.client
            .read(
                &format!("/api/get-prospect-history/{id}"),
                RequestOptions::new(),
                Shape::Envelope,
            )
            .await
    }

    pub async fn add_follow_up(&self, input: &FollowUpInput) -> Result<FollowUp, ApiError> {
        self.client
            .write("/api/add-follow-up", input, Shape::Envelope)
            .await
    }

    /// Prospects that have not been qualified yet.
    pub async fn leads(&self) -> Result<Vec<Prospect>, ApiError> {
        self.client
            .read("/api/get-leads", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn convert_lead(&self, id: u64) -> Result<Prospect, ApiError> {
        self.client
            .write(&format!("/api/convert-lead/{id}"), &json!({}), Shape::Envelope)
            .await
    }
}
