//! JSON-RPC dispatch for the MCP tool surface.

use serde_json::{json, Value};

use super::types::*;
use crate::tools::ToolRegistry;

/// Name reported in `initialize` results.
pub const SERVER_NAME: &str = "hello-mcp";

/// Protocol revisions this server speaks, newest first.
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2025-06-18", "2025-03-26", "2024-11-05"];

/// Stateless MCP server. Every message is answered from the tool registry
/// alone, so one instance can serve any number of concurrent clients.
pub struct McpServer {
    tools: ToolRegistry,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(tools: ToolRegistry) -> Self {
        Self {
            tools,
            info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Handle one decoded POST body, either a single message or a batch.
    ///
    /// Returns `None` when nothing needs to be sent back (only notifications
    /// or client replies were received).
    pub async fn handle_payload(&self, payload: Value) -> Option<Reply> {
        match payload {
            Value::Array(messages) => {
                if messages.is_empty() {
                    return Some(Reply::Single(JsonRpcResponse::failure(
                        Value::Null,
                        RpcError::invalid_request("empty batch"),
                    )));
                }
                let mut responses = Vec::with_capacity(messages.len());
                for message in messages {
                    if let Some(response) = self.handle_message(message).await {
                        responses.push(response);
                    }
                }
                if responses.is_empty() {
                    None
                } else {
                    Some(Reply::Batch(responses))
                }
            }
            message => self.handle_message(message).await.map(Reply::Single),
        }
    }

    /// Handle a single JSON-RPC message.
    pub async fn handle_message(&self, message: Value) -> Option<JsonRpcResponse> {
        match IncomingMessage::from_value(message) {
            Ok(IncomingMessage::Call(request)) => self.handle_request(&request).await,
            Ok(IncomingMessage::Reply) => None,
            Err(response) => Some(response),
        }
    }

    /// Dispatch a validated request. Notifications never produce a response.
    pub async fn handle_request(&self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "MCP message");

        let Some(id) = request.id.clone() else {
            match request.method.as_str() {
                "notifications/initialized" | "initialized" => {
                    tracing::debug!("MCP client initialized");
                }
                other => tracing::debug!("Ignoring MCP notification {}", other),
            }
            return None;
        };

        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.initialize(&request.params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.tools.definitions() })),
            "tools/call" => self.call_tool(&request.params).await,
            other => Err(RpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => {
                tracing::debug!("MCP request failed: {}", error);
                JsonRpcResponse::failure(id, error)
            }
        })
    }

    fn initialize(&self, params: &Value) -> Value {
        let requested = params.get("protocolVersion").and_then(Value::as_str);
        let result = InitializeResult {
            protocol_version: negotiate_protocol_version(requested).to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: self.info.clone(),
        };
        json!(result)
    }

    async fn call_tool(&self, params: &Value) -> Result<Value, RpcError> {
        let params: CallToolParams = serde_json::from_value(params.clone())
            .map_err(|e| RpcError::invalid_params(format!("Invalid tools/call params: {}", e)))?;

        if !self.tools.has_tool(&params.name) {
            return Ok(json!(ToolResult::error(format!(
                "Unknown tool: {}",
                params.name
            ))));
        }

        let result = match self.tools.execute(&params.name, params.arguments).await {
            Ok(text) => ToolResult::text(text),
            Err(e) => {
                tracing::warn!("Tool {} failed: {}", params.name, e);
                ToolResult::error(format!("Tool error: {}", e))
            }
        };
        Ok(json!(result))
    }
}

/// Echo the client's protocol version when supported, otherwise offer the newest.
pub fn negotiate_protocol_version(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|v| SUPPORTED_PROTOCOL_VERSIONS.iter().find(|s| **s == v))
        .copied()
        .unwrap_or(SUPPORTED_PROTOCOL_VERSIONS[0])
}
