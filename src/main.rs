//! MediHub Server — Healthcare Record Hub Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use medihub_core::config::AppConfig;
use medihub_core::error::AppError;

use medihub_api::state::{AppState, StoreSet};
use medihub_database::repositories::access_request::AccessRequestRepository;
use medihub_database::repositories::appointment::AppointmentRepository;
use medihub_database::repositories::lab_result::LabResultRepository;
use medihub_database::repositories::medical_record::MedicalRecordRepository;
use medihub_database::repositories::notification::NotificationRepository;
use medihub_database::repositories::prescription::PrescriptionRepository;
use medihub_database::repositories::user::UserRepository;
use medihub_worker::ExpirySweeper;

#[tokio::main]
async fn main() {
    let env = std::env::var("MEDIHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting MediHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = medihub_database::connection::create_pool(&config.database).await?;
    medihub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize stores ────────────────────────────────
    let stores = StoreSet {
        users: Arc::new(UserRepository::new(db_pool.clone())),
        access_requests: Arc::new(AccessRequestRepository::new(db_pool.clone())),
        notifications: Arc::new(NotificationRepository::new(db_pool.clone())),
        medical_records: Arc::new(MedicalRecordRepository::new(db_pool.clone())),
        prescriptions: Arc::new(PrescriptionRepository::new(db_pool.clone())),
        lab_results: Arc::new(LabResultRepository::new(db_pool.clone())),
        appointments: Arc::new(AppointmentRepository::new(db_pool.clone())),
    };

    // ── Step 3: Wire services into application state ─────────────
    let state = AppState::new(Arc::new(config.clone()), stores.clone());

    // ── Step 4: Shutdown channel + expiry sweeper ────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let sweeper_handle = if config.worker.enabled {
        let sweeper = ExpirySweeper::new(
            Arc::clone(&stores.access_requests),
            Arc::clone(&stores.notifications),
            config.worker.clone(),
        );
        let sweeper_cancel = shutdown_rx.clone();
        Some(tokio::spawn(async move {
            sweeper.run(sweeper_cancel).await;
        }))
    } else {
        tracing::info!("Expiry sweeper disabled");
        None
    };

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app = medihub_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("MediHub server listening on {addr}");

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 6: Wait for background tasks ────────────────────────
    if let Some(handle) = sweeper_handle {
        let _ = tokio::time::timeout(std::time::Duration::from_secs(10), handle).await;
    }

    tracing::info!("MediHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
