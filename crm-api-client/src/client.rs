// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! API Client
//!
//! The single shared client. Controllers borrow it through the area
//! accessors (`client.prospects().list()`); auth header attachment and
//! payload unwrapping happen here once instead of in every call.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::controllers::{
    AttendanceApi, NotificationsApi, OpportunitiesApi, OrdersApi, PermissionsApi, ProductsApi,
    ProspectsApi, QuotationsApi, SettingsApi, SocialPostsApi, WithdrawalsApi,
};
use crate::envelope::{unwrap_payload, Shape};
use crate::error::ApiError;
use crate::http::{HttpClient, RequestOptions};
use crate::storage::LocalStorage;

// =============================================================================
// Session Types
// =============================================================================

/// Login form.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: String,

    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub user_id: Option<u64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}

// =============================================================================
// API Client
// =============================================================================

/// Shared client for the back office API.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    storage: Arc<dyn LocalStorage>,
    token_header: String,
    token_key: String,
}

impl ApiClient {
    /// Build the client from its configuration and a storage backend.
    pub fn new(config: &ClientConfig, storage: Arc<dyn LocalStorage>) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config.base_url, config.timeout())?;

        debug!(
            base_url = %http.base_url(),
            timeout_ms = http.timeout().as_millis() as u64,
            "API client created"
        );

        Ok(Self {
            http,
            storage,
            token_header: config.token_header.clone(),
            token_key: config.token_key.clone(),
        })
    }

    /// Same connection pool and settings over another storage backend.
    ///
    /// A server handling several users builds one of these per request so
    /// each caller only sees its own token.
    pub fn with_storage(&self, storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            http: self.http.clone(),
            storage,
            token_header: self.token_header.clone(),
            token_key: self.token_key.clone(),
        }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Stored auth token, if any.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(&self.token_key)
            .filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Attach the auth header when a token is stored.
    fn authorize(&self, options: RequestOptions) -> RequestOptions {
        match self.token() {
            Some(token) => options.header(self.token_header.as_str(), token),
            None => options,
        }
    }

    pub(crate) async fn read<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        shape: Shape,
    ) -> Result<T, ApiError> {
        let body = self.http.get(path, self.authorize(options)).await?;
        unwrap_payload(body, shape)
    }

    pub(crate) async fn write<B, T>(&self, path: &str, body: &B, shape: Shape) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(path, body, self.authorize(RequestOptions::new()))
            .await?;
        let payload = unwrap_payload(response, shape)?;
        info!(path = %path, "API write succeeded");
        Ok(payload)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in and persist the returned token.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let session: Session = self
            .write("/api/login", credentials, Shape::Envelope)
            .await?;

        if session.token.is_empty() {
            return Err(ApiError::MissingField { field: "token" });
        }

        self.storage.set_item(&self.token_key, &session.token)?;
        info!(user_id = ?session.user_id, "logged in");
        Ok(session)
    }

    /// Log out. The stored token is dropped even when the call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result: Result<Value, ApiError> =
            self.write("/api/logout", &serde_json::json!({}), Shape::Raw).await;

        self.storage.remove_item(&self.token_key)?;

        match result {
            Ok(_) => {
                info!("logged out");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "logout call failed, local token cleared anyway");
                Err(e)
            }
        }
    }

    // =========================================================================
    // Business Areas
    // =========================================================================

    pub fn attendance(&self) -> AttendanceApi<'_> {
        AttendanceApi::new(self)
    }

    pub fn prospects(&self) -> ProspectsApi<'_> {
        ProspectsApi::new(self)
    }

    pub fn opportunities(&self) -> OpportunitiesApi<'_> {
        OpportunitiesApi::new(self)
    }

    pub fn quotations(&self) -> QuotationsApi<'_> {
        QuotationsApi::new(self)
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub fn withdrawals(&self) -> WithdrawalsApi<'_> {
        WithdrawalsApi::new(self)
    }

    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi::new(self)
    }

    pub fn permissions(&self) -> PermissionsApi<'_> {
        PermissionsApi::new(self)
    }

    pub fn settings(&self) -> SettingsApi<'_> {
        SettingsApi::new(self)
    }

    pub fn social_posts(&self) -> SocialPostsApi<'_> {
        SocialPostsApi::new(self)
    }
}
