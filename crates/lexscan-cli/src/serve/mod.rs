//! Local web server for the legal analysis page.
//!
//! Serves a single page with a category selector, a text box and a results
//! area, plus the JSON endpoints the page calls.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API request/response types (DTOs)
//! - `templates` - HTML/CSS/JS template rendering

mod handlers;
mod models;
mod templates;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use color_eyre::eyre::{Result, WrapErr};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use tokio::net::TcpListener;

use lexscan_core::{Analyzer, Generator};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
///
/// Immutable after startup; requests never coordinate with each other.
pub struct AppState {
    pub analyzer: Analyzer<Box<dyn Generator>>,
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Configuration for the analysis server.
pub struct ServeConfig {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to open the browser automatically.
    pub open_browser: bool,
}

// =============================================================================
// Router
// =============================================================================

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Main page
        .route("/", get(handlers::index))
        // API endpoints
        .route("/api/analyze", post(handlers::api_analyze))
        .route("/api/categories", get(handlers::api_categories))
        .route("/api/examples", get(handlers::api_examples))
        .route("/health", get(handlers::health))
        // CORS for API access
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Start the analysis server.
pub async fn start_server(
    config: ServeConfig,
    analyzer: Analyzer<Box<dyn Generator>>,
) -> Result<()> {
    let state = Arc::new(AppState { analyzer });
    let app = router(state);

    // Bind before opening the browser so the first request succeeds
    let listener = bind(&config.host, config.port).await?;
    let addr = listener
        .local_addr()
        .wrap_err("Failed to read bound address")?;
    let url = format!("http://{}", addr);

    println!("Starting lexscan analysis server...");
    println!("Page: {}", url);
    println!("Press Ctrl+C to stop\n");
    info!(%addr, "Listening");

    if config.open_browser {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "Could not open browser");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server failed")?;

    info!("Server stopped");
    Ok(())
}

/// Bind a listener. `host` may be an IP literal or a name to resolve.
async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .wrap_err_with(|| format!("Failed to bind to {}:{}", host, port))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
