//! Web node bootstrap - configuration, shared state, and the server loop.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::flags::CompletionFlags;
use crate::routes::build_router;
use crate::session::SessionStore;
use pulse_core::Catalog;

/// Configuration for the web node.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen address
    pub addr: SocketAddr,

    /// Lifetime of completion markers, in days
    pub completion_ttl_days: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ServerConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let addr = std::env::var("PULSE_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid PULSE_ADDR");

        let completion_ttl_days = std::env::var("PULSE_COMPLETION_TTL_DAYS")
            .map(|s| s.parse().expect("Invalid PULSE_COMPLETION_TTL_DAYS"))
            .unwrap_or(365);

        Self {
            addr,
            completion_ttl_days,
        }
    }
}

/// Shared state for all request handlers.
pub struct AppState {
    pub catalog: Catalog,
    pub sessions: SessionStore,
    pub flags: CompletionFlags,
}

impl AppState {
    /// State with the built-in catalog.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            catalog: Catalog::builtin(),
            sessions: SessionStore::new(),
            flags: CompletionFlags::new(config.completion_ttl_days),
        }
    }
}

/// Bind and serve until shutdown.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(&config));
    info!("Serving {} surveys", state.catalog.surveys().len());

    let app = build_router(state);

    let listener = TcpListener::bind(config.addr).await?;
    info!("Listening on http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        // Scoped to the defaults: the env vars are not set under `cargo test`.
        let config = ServerConfig::from_env();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.completion_ttl_days, 365);
    }
}
