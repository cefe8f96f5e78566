// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use crm_api_client::{ClientConfig, TOKEN_KEY};
use serde::Deserialize;

/// Configuration loaded from environment variables.
///
/// All configuration is externalized to support 12-factor app deployment.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Back office API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request API timeout in seconds (default: 30)
    #[serde(default = "default_api_timeout")]
    pub api_timeout_secs: u64,

    /// Cookie holding each browser's API token (default: crm_token)
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    /// Header carrying the auth token (default: token)
    #[serde(default = "default_token_header")]
    pub token_header: String,

    /// Backend health check interval in seconds (default: 15)
    #[serde(default = "default_health_check_interval")]
    pub backend_health_check_interval_secs: u64,

    /// Backend health check timeout in seconds (default: 2)
    #[serde(default = "default_health_check_timeout")]
    pub backend_health_check_timeout_secs: u64,

    /// Log level (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "json" or "pretty" (default: json)
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_api_timeout() -> u64 {
    30
}

fn default_session_cookie() -> String {
    "crm_token".to_string()
}

fn default_token_header() -> String {
    "token".to_string()
}

fn default_health_check_interval() -> u64 {
    15
}

fn default_health_check_timeout() -> u64 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Example: `API_BASE_URL`, `LOG_LEVEL`, etc.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Settings for the template API client cloned into every request.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            timeout_seconds: self.api_timeout_secs,
            token_header: self.token_header.clone(),
            token_key: TOKEN_KEY.to_string(),
        }
    }
}
