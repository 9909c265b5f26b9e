//! Dopair backend server.
//!
//! ## Endpoints
//!
//! - `ANY /corsTest` - CORS test endpoint
//! - `GET /health` - Liveness check
//! - `GET|POST /api/users/me` - Caller profile
//! - `GET /api/users/me/access` - Dashboard access check

use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use dopair::adapters::http::{build_router, UsersAppState};
use dopair::adapters::{DocumentProfileRepository, InMemoryDocumentStore, StatusAccessPolicy};
use dopair::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration first: the log filter comes from it
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        environment = ?config.server.environment,
        "Configuration loaded"
    );

    let allowed_statuses = config.access.allowed_statuses_list()?;
    let policy = StatusAccessPolicy::allowing(allowed_statuses);
    tracing::info!(allowed = ?policy.allowed_statuses(), "Access policy configured");

    let store = Arc::new(InMemoryDocumentStore::new());
    let repository = Arc::new(DocumentProfileRepository::new(store));
    let state = UsersAppState::new(repository, Arc::new(policy));

    let app = build_router(&config, state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
