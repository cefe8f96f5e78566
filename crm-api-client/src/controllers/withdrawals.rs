// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Wallet Withdrawals

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::ApiClient;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Withdrawal {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    #[serde(deserialize_with = "crate::de::id")]
    pub user_id: u64,
    pub user_name: String,
    pub amount: f64,
    pub method: Option<String>,
    pub status: String,
    pub reason: Option<String>,
    pub requested_at: Option<String>,
    pub processed_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WithdrawalRequest {
    pub user_id: u64,
    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletBalance {
    #[serde(deserialize_with = "crate::de::id")]
    pub user_id: u64,
    pub balance: f64,
    pub pending: f64,
    pub currency: String,
}

pub struct WithdrawalsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> WithdrawalsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Withdrawals, optionally restricted to one status (`pending`, ...).
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Withdrawal>, ApiError> {
        let options = RequestOptions::new().query_opt("status", status);
        self.client
            .read("/api/get-withdrawals", options, Shape::Envelope)
            .await
    }

    pub async fn request(&self, request: &WithdrawalRequest) -> Result<Withdrawal, ApiError> {
        self.client
            .write("/api/request-withdrawal", request, Shape::Envelope)
            .await
    }

    pub async fn approve(&self, id: u64) -> Result<Withdrawal, ApiError> {
        self.client
            .write(
                &format!("/api/approve-withdrawal/{id}"),
                &json!({}),
                Shape::Envelope,
            )
            .await
    }

    pub async fn reject(&self, id: u64, reason: &str) -> Result<Withdrawal, ApiError> {
        self.client
            .write(
                &format!("/api/reject-withdrawal/{id}"),
                &json!({ "reason": reason }),
                Shape::Envelope,
            )
            .await
    }

    pub async fn wallet_balance(&self, user_id: u64) -> Result<WalletBalance, ApiError> {
        let options = RequestOptions::new().query("user_id", user_id);
        self.client
            .read("/api/get-wallet-balance", options, Shape::Envelope)
            .await
    }
}
