// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Opportunities

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Opportunity {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    #[serde(deserialize_with = "crate::de::id")]
    pub prospect_id: u64,
    pub prospect_name: String,
    pub title: String,
    pub stage: String,
    pub expected_value: f64,
    pub probability: Option<u8>,
    pub expected_close_date: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OpportunityInput {
    pub prospect_id: u64,
    pub title: String,
    pub stage: String,
    pub expected_value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_close_date: Option<String>,
}

pub struct OpportunitiesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OpportunitiesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Opportunity>, ApiError> {
        self.client
            .read("/api/get-opportunities", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Opportunity, ApiError> {
        self.client
            .read(
                &format!("/api/get-opportunity/{id}"),
                RequestOptions::new(),
                Shape::Envelope,
            )
            .await
    }

    pub async fn create(&self, input: &OpportunityInput) -> Result<Opportunity, ApiError> {
        self.client
            .write("/api/add-opportunity", input, Shape::Envelope)
            .await
    }

    pub async fn update(&self, id: u64, input: &OpportunityInput) -> Result<Opportunity, ApiError> {
        self.client
            .write(
                &format!("/api/update-opportunity/{id}"),
                input,
                Shape::Envelope,
            )
            .await
    }

    /// Switch the opportunity flag of a prospect on or off.
    pub async fn toggle(&self, prospect_id: u64, enabled: bool) -> Result<Value, ApiError> {
        let body = json!({ "prospect_id": prospect_id, "enabled": enabled });
        self.client
            .write("/api/toggle-opportunity", &body, Shape::Raw)
            .await
    }

    /// Stage names; this endpoint returns a bare array.
    pub async fn stages(&self) -> Result<Vec<String>, ApiError> {
        self.client
            .read(
                "/api/get-opportunity-stages",
                RequestOptions::new(),
                Shape::Raw,
            )
            .await
    }
}
