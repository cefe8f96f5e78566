// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Error Types
//!
//! Every controller returns `Result<T, ApiError>`. Transport, HTTP status,
//! envelope and decoding failures all land here so that callers have a
//! single type to match on.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("API rejected request: {message}")]
    Rejected { message: String },

    #[error("Response is missing field: {field}")]
    MissingField { field: &'static str },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("Local storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// True when the request hit the client's fixed timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Http(e) if e.is_timeout())
    }

    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Storage(err.to_string())
    }
}
