// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Social Posts

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialPost {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub platform: String,
    pub content: String,
    pub image_url: Option<String>,
    pub status: String,
    pub scheduled_at: Option<String>,
    pub likes: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSocialPost {
    pub platform: String,
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialPostStats {
    pub total_posts: u64,
    pub scheduled: u64,
    pub published: u64,
    pub total_likes: u64,
    pub total_shares: u64,
}

pub struct SocialPostsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SocialPostsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<SocialPost>, ApiError> {
        self.client
            .read("/api/get-social-posts", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn create(&self, post: &NewSocialPost) -> Result<SocialPost, ApiError> {
        self.client
            .write("/api/create-social-post", post, Shape::Envelope)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Value, ApiError> {
        self.client
            .write(
                &format!("/api/delete-social-post/{id}"),
                &json!({}),
                Shape::Raw,
            )
            .await
    }

    pub async fn stats(&self) -> Result<SocialPostStats, ApiError> {
        self.client
            .read(
                "/api/get-social-post-stats",
                RequestOptions::new(),
                Shape::Envelope,
            )
            .await
    }
}
