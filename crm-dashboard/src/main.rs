use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crm_api_client::{ApiClient, MemoryStorage};

mod config;
mod handlers;
mod health;
mod routes;
mod views;
mod widgets;

use config::Config;
use handlers::{health_live, health_ready, health_startup, HealthState};
use health::BackendHealthChecker;
use routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_tracing(&config);

    tracing::info!(
        host = %config.host,
        port = config.port,
        api_base_url = %config.api_base_url,
        session_cookie = %config.session_cookie,
        "starting crm-dashboard"
    );

    // Template client; each request swaps in the browser's own token
    let api = ApiClient::new(&config.client_config(), Arc::new(MemoryStorage::new()))?;

    // One broadcast stops the health checker and the server
    let (shutdown_tx, _) = broadcast::channel::<()>(1);
    let shutting_down = Arc::new(AtomicBool::new(false));

    let health_checker = Arc::new(BackendHealthChecker::new(
        &config.api_base_url,
        Duration::from_secs(config.backend_health_check_interval_secs),
        Duration::from_secs(config.backend_health_check_timeout_secs),
    )?);

    let health_shutdown_rx = shutdown_tx.subscribe();
    let health_checker_clone = Arc::clone(&health_checker);
    tokio::spawn(async move {
        health_checker_clone.run(health_shutdown_rx).await;
    });

    let health_state = HealthState {
        backend_healthy: health_checker.state(),
        shutting_down: Arc::clone(&shutting_down),
    };

    let pages = routes::router(AppState {
        api,
        views: views::registry(),
        session_cookie: config.session_cookie.clone(),
    });

    let app = Router::new()
        .route("/health/live", get(health_live))
        .route("/health/startup", get(health_startup))
        .route("/health/ready", get(health_ready).with_state(health_state))
        .merge(pages)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "listening for connections");

    let shutdown_tx_clone = shutdown_tx.clone();
    let shutting_down_clone = Arc::clone(&shutting_down);
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("shutdown signal received, initiating graceful shutdown");

        // Readiness reports not ready from here on
        shutting_down_clone.store(true, Ordering::SeqCst);

        let _ = shutdown_tx_clone.send(());
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let mut rx = shutdown_tx.subscribe();
            let _ = rx.recv().await;
        })
        .await?;

    tracing::info!(
        backend_healthy = health_checker.is_healthy(),
        backend_outages = health_checker.outage_count(),
        "crm-dashboard stopped"
    );
    Ok(())
}

/// Initialize tracing based on configuration.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
