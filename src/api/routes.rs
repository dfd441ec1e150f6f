//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::agent::HelloAgent;
use crate::config::Config;

use super::types::*;

/// Shared application state. Immutable after startup.
pub struct AppState {
    pub config: Config,
    /// The agent used for greetings
    pub agent: HelloAgent,
}

/// Build the application router for `config`.
///
/// The MCP tool surface is decided here, once, and never re-evaluated.
pub fn router(config: &Config) -> Router {
    build_router(config, config.tool_surface_enabled())
}

fn build_router(config: &Config, tool_surface: bool) -> Router {
    let state = Arc::new(AppState {
        config: config.clone(),
        agent: HelloAgent::new(),
    });

    let mut routes = Router::new()
        .route("/api/hello", get(hello_query).post(hello))
        .route("/health", get(health));

    if tool_surface {
        routes = mount_tool_surface(routes);
    } else {
        tracing::info!("MCP tool surface not available, serving HTTP routes only");
    }

    routes
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(feature = "mcp")]
fn mount_tool_surface(routes: Router<Arc<AppState>>) -> Router<Arc<AppState>> {
    use super::mcp::{self as mcp_api, MCP_MOUNT_PATH};

    tracing::info!("MCP tool surface mounted at {}", MCP_MOUNT_PATH);
    routes.nest(MCP_MOUNT_PATH, mcp_api::router(mcp_api::default_server()))
}

#[cfg(not(feature = "mcp"))]
fn mount_tool_surface(routes: Router<Arc<AppState>>) -> Router<Arc<AppState>> {
    routes
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let app = router(&config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Setup graceful shutdown on SIGTERM/SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests...");
}

/// Greet the name from the JSON body.
async fn hello(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GreetingRequest>,
) -> Json<GreetingResponse> {
    tracing::debug!(name = %req.name, "Greeting requested");
    Json(GreetingResponse {
        message: state.agent.greet(&req.name),
    })
}

/// Greet the name from the query string.
async fn hello_query(
    State(state): State<Arc<AppState>>,
    Query(req): Query<GreetingRequest>,
) -> Json<GreetingResponse> {
    tracing::debug!(name = %req.name, "Greeting requested via query");
    Json(GreetingResponse {
        message: state.agent.greet(&req.name),
    })
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
