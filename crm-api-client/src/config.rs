// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use std::time::Duration;

use crate::storage::TOKEN_KEY;

/// Configuration for the shared API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without the `/api` prefix
    pub base_url: String,

    /// Request timeout in seconds, applied to every request
    pub timeout_seconds: u64,

    /// Name of the header that carries the auth token
    pub token_header: String,

    /// Local storage key the auth token is kept under
    pub token_key: String,
}

impl ClientConfig {
    /// Create a config for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 30,
            token_header: "token".to_string(),
            token_key: TOKEN_KEY.to_string(),
        }
    }
}
