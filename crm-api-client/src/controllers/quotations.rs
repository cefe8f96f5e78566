// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Quotations
//!
//! Totals, taxes and numbering are computed by the server.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::ApiClient;
use crate::controllers::orders::Order;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotationLine {
    #[serde(deserialize_with = "crate::de::id")]
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quotation {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub quotation_no: String,
    #[serde(deserialize_with = "crate::de::id")]
    pub prospect_id: u64,
    pub customer_name: String,
    pub status: String,
    pub total: f64,
    pub valid_until: Option<String>,
    pub items: Vec<QuotationLine>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewQuotation {
    pub prospect_id: u64,
    pub items: Vec<QuotationLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub struct QuotationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> QuotationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Quotation>, ApiError> {
        self.client
            .read("/api/get-quotations", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Quotation, ApiError> {
        self.client
            .read(
                &format!("/api/get-quotation/{id}"),
                RequestOptions::new(),
                Shape::Envelope,
            )
            .await
    }

    pub async fn create(&self, quotation: &NewQuotation) -> Result<Quotation, ApiError> {
        self.client
            .write("/api/create-quotation", quotation, Shape::Envelope)
            .await
    }

    pub async fn update_status(&self, id: u64, status: &str) -> Result<Quotation, ApiError> {
        self.client
            .write(
                &format!("/api/update-quotation-status/{id}"),
                &json!({ "status": status }),
                Shape::Envelope,
            )
            .await
    }

    /// Turn an accepted quotation into an order.
    pub async fn convert_to_order(&self, id: u64) -> Result<Order, ApiError> {
        self.client
            .write(
                &format!("/api/convert-quotation/{id}"),
                &json!({}),
                Shape::Envelope,
            )
            .await
    }
}
