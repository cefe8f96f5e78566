// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

/// Health checker for the back office API.
///
/// Periodically checks the API root and tracks outages. The state only feeds
/// the readiness endpoint; controller calls are never gated on it.
pub struct BackendHealthChecker {
    api_base_url: String,
    check_interval: Duration,
    check_timeout: Duration,
    current_state: Arc<AtomicBool>,
    outage_count: Arc<AtomicU64>,
    client: reqwest::Client,
}

impl BackendHealthChecker {
    /// Create a new health checker.
    ///
    /// # Arguments
    /// * `api_base_url` - Base URL of the back office API
    /// * `check_interval` - How often to check (default: 15s)
    /// * `check_timeout` - Timeout for each check (default: 2s)
    pub fn new(
        api_base_url: &str,
        check_interval: Duration,
        check_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(check_timeout).build()?;

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            check_interval,
            check_timeout,
            current_state: Arc::new(AtomicBool::new(true)), // Assume healthy initially
            outage_count: Arc::new(AtomicU64::new(0)),
            client,
        })
    }

    /// Run the health check loop until a shutdown signal is received.
    pub async fn run(&self, mut shutdown: broadcast::Receiver<()>) {
        let mut interval = tokio::time::interval(self.check_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        tracing::info!(
            url = %self.api_base_url,
            interval_secs = self.check_interval.as_secs(),
            timeout_secs = self.check_timeout.as_secs(),
            "starting backend health checker"
        );

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.check_once().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("backend health checker received shutdown signal");
                    break;
                }
            }
        }

        tracing::info!("backend health checker stopped");
    }

    /// Check once, record the result and log state transitions.
    pub async fn check_once(&self) -> bool {
        let is_healthy = self.ping().await;
        let was_healthy = self.current_state.swap(is_healthy, Ordering::SeqCst);

        if was_healthy && !is_healthy {
            let count = self.outage_count.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::warn!(
                event = "backend_unreachable",
                url = %self.api_base_url,
                total_outages = count,
                "back office API became unreachable"
            );
        } else if !was_healthy && is_healthy {
            tracing::info!(
                event = "backend_recovered",
                url = %self.api_base_url,
                "back office API recovered"
            );
        }

        is_healthy
    }

    async fn ping(&self) -> bool {
        let url = format!("{}/", self.api_base_url);

        match self.client.get(&url).send().await {
            Ok(resp) => {
                let status = resp.status();
                // Anything below 500 means the API process answered.
                if !status.is_server_error() {
                    tracing::trace!(status = %status, "backend health check passed");
                    true
                } else {
                    tracing::warn!(
                        status = %status,
                        url = %url,
                        "backend health check returned server error"
                    );
                    false
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "backend health check failed");
                false
            }
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.current_state.load(Ordering::SeqCst)
    }

    pub fn outage_count(&self) -> u64 {
        self.outage_count.load(Ordering::Relaxed)
    }

    /// Get an Arc clone of the health state for sharing with handlers.
    pub fn state(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.current_state)
    }
}
