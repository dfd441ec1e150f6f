//! Streamable-HTTP transport for the MCP server.
//!
//! Stateless: one POST carries one JSON-RPC message (or batch) and the reply
//! comes back as `application/json`. No sessions and no server-initiated SSE
//! stream, so GET and DELETE on the endpoint answer 405.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;

use crate::mcp::{JsonRpcResponse, McpServer, RpcError};
use crate::tools::ToolRegistry;

/// Path the tool surface is nested under.
pub const MCP_MOUNT_PATH: &str = "/mcp";

/// Build an MCP server over the default tool registry.
pub fn default_server() -> Arc<McpServer> {
    Arc::new(McpServer::new(ToolRegistry::new()))
}

/// Sub-router serving the MCP endpoint at its root.
pub fn router<S>(server: Arc<McpServer>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(post_message))
        .with_state(server)
}

/// Handle one POSTed JSON-RPC message or batch.
async fn post_message(State(server): State<Arc<McpServer>>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!("Rejecting unparseable MCP body: {}", e);
            let response = JsonRpcResponse::failure(Value::Null, RpcError::parse_error(e.to_string()));
            return (StatusCode::BAD_REQUEST, Json(response)).into_response();
        }
    };

    match server.handle_payload(payload).await {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
