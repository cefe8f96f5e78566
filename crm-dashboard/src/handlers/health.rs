// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Liveness, startup and readiness endpoints for the dashboard process.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared state for health endpoints.
#[derive(Clone)]
pub struct HealthState {
    /// Back office API reachability, written by `BackendHealthChecker`
    pub backend_healthy: Arc<AtomicBool>,
    pub shutting_down: Arc<AtomicBool>,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_status: Option<&'static str>,
}

fn reply(code: StatusCode, status: &'static str, backend_status: Option<&'static str>) -> Response {
    let body = HealthBody {
        status,
        version: env!("CARGO_PKG_VERSION"),
        backend_status,
    };
    (code, Json(body)).into_response()
}

/// `GET /health/live`
pub async fn health_live() -> Response {
    reply(StatusCode::OK, "ok", None)
}

/// `GET /health/startup`
///
/// Configuration is loaded before the listener binds, so a
/// reachable endpoint means startup is done.
pub async fn health_startup() -> Response {
    reply(StatusCode::OK, "ok", None)
}

/// Readiness check.
///
/// Returns 503 only while shutting down. An unreachable API still reports
/// 200: pages keep rendering, with empty tables.
///
/// # Endpoint
/// `GET /health/ready`
pub async fn health_ready(State(state): State<HealthState>) -> Response {
    if state.shutting_down.load(Ordering::SeqCst) {
        return reply(StatusCode::SERVICE_UNAVAILABLE, "shutting_down", None);
    }

    match state.backend_healthy.load(Ordering::SeqCst) {
        true => reply(StatusCode::OK, "ok", Some("healthy")),
        false => reply(StatusCode::OK, "degraded", Some("unhealthy")),
    }
}
