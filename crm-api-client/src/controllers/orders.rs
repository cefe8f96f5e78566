// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Orders

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::ApiClient;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderLine {
    #[serde(deserialize_with = "crate::de::id")]
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub order_no: String,
    pub customer_name: String,
    pub status: String,
    pub payment_status: Option<String>,
    pub total: f64,
    pub items: Vec<OrderLine>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub prospect_id: u64,
    pub items: Vec<OrderLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

pub struct OrdersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrdersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Order>, ApiError> {
        self.client
            .read("/api/get-orders", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Order, ApiError> {
        self.client
            .read(
                &format!("/api/get-order/{id}"),
                RequestOptions::new(),
                Shape::Envelope,
            )
            .await
    }

    pub async fn create(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.client
            .write("/api/create-order", order, Shape::Envelope)
            .await
    }

    pub async fn update_status(&self, id: u64, status: &str) -> Result<Order, ApiError> {
        self.client
            .write(
                &format!("/api/update-order-status/{id}"),
                &json!({ "status": status }),
                Shape::Envelope,
            )
            .await
    }

    pub async fn cancel(&self, id: u64, reason: &str) -> Result<Order, ApiError> {
        self.client
            .write(
                &format!("/api/cancel-order/{id}"),
                &json!({ "reason": reason }),
                Shape::Envelope,
            )
            .await
    }
}
