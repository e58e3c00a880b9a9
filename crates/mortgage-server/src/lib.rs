//! # Mortgage Server
//!
//! REST server for mortgage interest rates and feasibility checks.
//!
//! ## Endpoints
//!
//! - `GET /api/interest-rates`: all offered rates
//! - `POST /api/mortgage-check`: affordability decision and monthly cost
//!
//! Both require `Authorization: Bearer <token>`.
//!
//! ## Usage
//!
//! ```ignore
//! use mortgage_server::{AppState, Server, ServerConfig};
//!
//! let server = Server::new(config, AppState::new(service, token));
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use handlers::AppState;

/// The mortgage server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        routes::create_router(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Start the server and run until Ctrl-C.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr()?;

        info!("Starting mortgage server on {}", addr);
        info!("  GET  /api/interest-rates");
        info!("  POST /api/mortgage-check");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
        return;
    }
    info!("Shutting down...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_engine::MortgageService;
    use mortgage_ext_file::RateTable;

    fn server_on(host: &str) -> Server {
        let config = ServerConfig {
            host: host.to_string(),
            port: 0,
            ..ServerConfig::default()
        };
        let service = MortgageService::new(Arc::new(RateTable::default()));
        Server::new(config, AppState::new(service, "token"))
    }

    #[tokio::test]
    async fn test_start_fails_on_invalid_host() {
        let err = server_on("localhost").start().await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("localhost"));
    }
}
