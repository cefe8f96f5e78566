// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! HTTP Client Wrapper
//!
//! One pre-configured `reqwest::Client` with a fixed base URL and a fixed
//! timeout. Every controller goes through [`HttpClient::get`] or
//! [`HttpClient::post`]; failures surface as `Err` with no retry.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::ApiError;

// =============================================================================
// Request Options
// =============================================================================

/// Per-request headers and query string.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add a query pair only when a value is present.
    pub fn query_opt<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    fn apply(&self, mut builder: RequestBuilder) -> RequestBuilder {
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }
        builder
    }
}

// =============================================================================
// HTTP Client
// =============================================================================

/// Shared HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client for `base_url` with a fixed request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if reqwest::Url::parse(&base_url).is_err() {
            return Err(ApiError::InvalidBaseUrl { url: base_url });
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for an API path.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue a GET and return the parsed JSON body.
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        debug!(url = %url, query = ?options.query, "GET");

        let response = options.apply(self.client.get(&url)).send().await?;
        Self::read_body(path, response).await
    }

    /// Issue a POST with a JSON body and return the parsed JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        debug!(url = %url, "POST");

        let response = options
            .apply(self.client.post(&url))
            .json(body)
            .send()
            .await?;
        Self::read_body(path, response).await
    }

    async fn read_body(path: &str, response: Response) -> Result<Value, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let status = status.as_u16();
            let message = response.text().await.unwrap_or_default();
            error!(status, path = %path, message = %message, "API request failed");
            return Err(ApiError::Status { status, message });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
