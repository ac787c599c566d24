//! ticklist-server: HTTP server for the ticklist to-do manager
//!
//! Routes HTML form submissions onto two persisted collections: the home
//! item collection (labeled by the current date) and named lists, each
//! embedding its own copies of items.

pub mod db;
pub mod error;
pub mod routes;
pub mod state;
pub mod view;

use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::{Error, Result};
pub use state::AppState;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/ticklist".to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Build the application router with all routes.
///
/// The static `/health` route wins over the `/{name}` capture; every other
/// list name is a valid page.
pub fn build_router(state: AppState, timeout_secs: u64) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(timeout_secs)));

    Router::new()
        .route("/", get(routes::home).post(routes::submit))
        .route("/delete", post(routes::delete_item))
        .route("/health", get(routes::health_check))
        .route("/{name}", get(routes::named_list))
        .with_state(state)
        .layer(middleware)
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig) -> Result<()> {
    let pool = db::create_pool(&config.database_url).await?;

    // Run migrations
    db::migrations::run(&pool).await?;

    let state = AppState::new(pool);
    let app = build_router(state, config.timeout_secs);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Starting server on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
