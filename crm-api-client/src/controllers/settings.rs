// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Settings, Company Address and Profile

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::controllers::prospects::Address;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

/// Company-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub company_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub currency: String,
    pub timezone: String,
    pub office_start: Option<String>,
    pub office_end: Option<String>,
}

/// The logged-in user's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

pub struct SettingsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SettingsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<Settings, ApiError> {
        self.client
            .read("/api/get-settings", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn update(&self, settings: &Settings) -> Result<Settings, ApiError> {
        self.client
            .write("/api/update-settings", settings, Shape::Envelope)
            .await
    }

    pub async fn company_address(&self) -> Result<Address, ApiError> {
        self.client
            .read(
                "/api/get-company-address",
                RequestOptions::new(),
                Shape::Envelope,
            )
            .await
    }

    pub async fn update_company_address(&self, address: &Address) -> Result<Address, ApiError> {
        self.client
            .write("/api/update-company-address", address, Shape::Envelope)
            .await
    }

    /// The profile endpoint returns the user object without an envelope.
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.client
            .read("/api/get-profile", RequestOptions::new(), Shape::Raw)
            .await
    }

    pub async fn update_profile(&self, input: &ProfileInput) -> Result<Profile, ApiError> {
        self.client
            .write("/api/update-profile", input, Shape::Envelope)
            .await
    }
}
