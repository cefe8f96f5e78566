// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Response Envelope
//!
//! Most endpoints answer `{ "status": ..., "data": ..., "message": ... }`.
//! `status` is either `"success"`/`"error"` or a boolean, and some endpoints
//! nest the payload one level deeper (`data.data`, paginated lists) or skip
//! the envelope entirely.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::de::strip_nulls;
use crate::error::ApiError;

/// Which part of a response body carries the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `body.data`
    Envelope,
    /// `body.data.data`
    Nested,
    /// The body itself
    Raw,
}

/// Envelope `status` field: a boolean, a number or a string depending on the
/// endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeStatus {
    Flag(bool),
    Code(f64),
    Text(String),
}

impl EnvelopeStatus {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(ok) => Some(Self::Flag(*ok)),
            Value::Number(n) => n.as_f64().map(Self::Code),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// `false`, `0`, `"error"` and `"fail"`/`"failed"` count as failures.
    pub fn is_failure(&self) -> bool {
        match self {
            EnvelopeStatus::Flag(ok) => !*ok,
            EnvelopeStatus::Code(code) => *code == 0.0,
            EnvelopeStatus::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "error" | "fail" | "failed" | "false" | "0"
            ),
        }
    }
}

/// The `{status, data, message}` wrapper, read field by field so that an
/// unexpected `message` or `status` type never hides a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: Option<EnvelopeStatus>,
    pub message: Option<String>,
    wrapper: bool,
}

impl Envelope {
    /// Read the envelope fields of a body. Non-object bodies have none.
    pub fn from_body(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        Some(Self {
            status: object.get("status").and_then(EnvelopeStatus::from_value),
            message: object.get("message").and_then(message_text),
            wrapper: is_wrapper(object),
        })
    }

    /// True when the body is a `{status, data|message}` wrapper rather than a
    /// resource carrying its own `status` (an order's `"pending"`, a
    /// payout's `"failed"`).
    pub fn is_wrapper(&self) -> bool {
        self.wrapper
    }

    /// Error when the server flagged the request as failed.
    pub fn check(&self) -> Result<(), ApiError> {
        match &self.status {
            Some(status) if status.is_failure() => Err(ApiError::Rejected {
                message: self
                    .message
                    .clone()
                    .unwrap_or_else(|| "request failed".to_string()),
            }),
            _ => Ok(()),
        }
    }
}

fn is_wrapper(object: &Map<String, Value>) -> bool {
    !object.contains_key("id") && (object.contains_key("data") || object.contains_key("message"))
}

/// Flatten a `message` into text. Validation errors arrive as
/// `{"field": ["reason", ...]}`; their strings are joined in order.
fn message_text(value: &Value) -> Option<String> {
    fn collect<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
        match value {
            Value::String(s) => out.push(s),
            Value::Array(items) => items.iter().for_each(|v| collect(v, out)),
            Value::Object(map) => map.values().for_each(|v| collect(v, out)),
            _ => {}
        }
    }

    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => {
            let mut parts = Vec::new();
            collect(other, &mut parts);
            if parts.is_empty() {
                Some(other.to_string())
            } else {
                Some(parts.join("; "))
            }
        }
    }
}

/// Enforce the envelope status, pick out the payload and decode it.
///
/// Enveloped shapes always honour `status`. A raw body only does when it
/// is a wrapper, so raw resources keep their own `status` values.
pub fn unwrap_payload<T: DeserializeOwned>(body: Value, shape: Shape) -> Result<T, ApiError> {
    if let Some(envelope) = Envelope::from_body(&body) {
        if shape != Shape::Raw || envelope.is_wrapper() {
            envelope.check()?;
        }
    }

    let payload = match shape {
        Shape::Raw => body,
        Shape::Envelope => take_field(body, "data")?,
        Shape::Nested => take_field(take_field(body, "data")?, "data")?,
    };

    Ok(serde_json::from_value(strip_nulls(payload))?)
}

fn take_field(mut value: Value, field: &'static str) -> Result<Value, ApiError> {
    value
        .get_mut(field)
        .map(Value::take)
        .ok_or(ApiError::MissingField { field })
}

// =============================================================================
// Read Fallback
// =============================================================================

/// Collapse a failed read into an empty value.
///
/// Views call this on every read so that a failed request renders an empty
/// table instead of an error page. Writes never go through here.
pub trait Fallback<T> {
    fn or_empty(self, operation: &str) -> T;
}

impl<T: Default> Fallback<T> for Result<T, ApiError> {
    fn or_empty(self, operation: &str) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                warn!(operation = %operation, error = %e, "read failed, rendering empty state");
                T::default()
            }
        }
    }
}
