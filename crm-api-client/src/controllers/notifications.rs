// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Notifications and Notices
//!
//! Notifications are per-user; notices are broadcast announcements.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnreadCount {
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notice {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub title: String,
    pub description: String,
    pub audience: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewNotice {
    pub title: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

pub struct NotificationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NotificationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Notification>, ApiError> {
        self.client
            .read("/api/get-notifications", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn unread_count(&self) -> Result<UnreadCount, ApiError> {
        self.client
            .read("/api/get-unread-count", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn mark_read(&self, id: u64) -> Result<Value, ApiError> {
        self.client
            .write(
                &format!("/api/mark-notification-read/{id}"),
                &json!({}),
                Shape::Raw,
            )
            .await
    }

    pub async fn mark_all_read(&self) -> Result<Value, ApiError> {
        self.client
            .write("/api/mark-all-read", &json!({}), Shape::Raw)
            .await
    }

    pub async fn notices(&self) -> Result<Vec<Notice>, ApiError> {
        self.client
            .read("/api/get-notices", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn add_notice(&self, notice: &NewNotice) -> Result<Notice, ApiError> {
        self.client
            .write("/api/add-notice", notice, Shape::Envelope)
            .await
    }
}
