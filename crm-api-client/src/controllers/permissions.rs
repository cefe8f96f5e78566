// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Roles and Permissions
//!
//! Enforcement is server-side. The dashboard only edits the role matrix.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewRole {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One permission flag of a role, e.g. `prospects.edit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permission {
    pub key: String,
    pub label: String,
    pub allowed: bool,
}

pub struct PermissionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PermissionsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        self.client
            .read("/api/get-roles", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn add_role(&self, role: &NewRole) -> Result<Role, ApiError> {
        self.client
            .write("/api/add-role", role, Shape::Envelope)
            .await
    }

    pub async fn role_permissions(&self, role_id: u64) -> Result<Vec<Permission>, ApiError> {
        self.client
            .read(
                &format!("/api/get-permissions/{role_id}"),
                RequestOptions::new(),
                Shape::Envelope,
            )
            .await
    }

    /// Replace the set of allowed permission keys for a role.
    pub async fn update_role_permissions(
        &self,
        role_id: u64,
        allowed: &[String],
    ) -> Result<Value, ApiError> {
        self.client
            .write(
                &format!("/api/update-permissions/{role_id}"),
                &json!({ "permissions": allowed }),
                Shape::Raw,
            )
            .await
    }
}
