//! Pre-Taste Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - routes: HTTP handlers

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod routes;

use config::Config;
use repository::{open_db, FeedbackRepository};

/// Application state shared across handlers
pub struct AppState {
    pub feedback_repo: FeedbackRepository,
}

impl AppState {
    pub fn new(feedback_repo: FeedbackRepository) -> Self {
        Self { feedback_repo }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::load();

    let _log_guard = rolling_logger::init_logger(&config.log_dir, "PreTaste")?;
    info!("Logging to {}", config.log_dir.display());
    config.report();

    let conn = open_db(&config.db_path)?;
    let state = Arc::new(AppState::new(FeedbackRepository::new(conn)));
    let app = routes::router(state, &config.static_dir);

    let address = config.address();
    let listener = TcpListener::bind(&address).await?;
    info!("Pre-Taste feedback server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => warn!("Failed to listen for Ctrl+C: {e}"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
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
