//! MCP types and data structures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const JSONRPC_VERSION: &str = "2.0";

// ==================== JSON-RPC 2.0 Types ====================

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

/// Incoming JSON-RPC 2.0 call. `id` is absent for notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRpcRequest {
    pub id: Option<Value>,
    pub method: String,
    pub params: Value,
}

/// A single message received from a client.
#[derive(Debug, Clone, PartialEq)]
pub enum IncomingMessage {
    /// Request or notification
    Call(JsonRpcRequest),
    /// Reply to a server-initiated request; nothing to answer
    Reply,
}

impl IncomingMessage {
    /// Validate a decoded JSON value as a JSON-RPC 2.0 message.
    ///
    /// On failure returns the error response to send back, carrying the
    /// message id when one could be recovered.
    pub fn from_value(message: Value) -> Result<Self, JsonRpcResponse> {
        let Value::Object(mut obj) = message else {
            return Err(JsonRpcResponse::failure(
                Value::Null,
                RpcError::invalid_request("message must be a JSON object"),
            ));
        };

        let id = obj.remove("id");
        let reply_id = id.clone().unwrap_or(Value::Null);

        if obj.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
            return Err(JsonRpcResponse::failure(
                reply_id,
                RpcError::invalid_request("jsonrpc must be \"2.0\""),
            ));
        }

        match obj.remove("method") {
            Some(Value::String(method)) => Ok(Self::Call(JsonRpcRequest {
                id,
                method,
                params: obj.remove("params").unwrap_or(Value::Null),
            })),
            None if id.is_some() && (obj.contains_key("result") || obj.contains_key("error")) => {
                Ok(Self::Reply)
            }
            _ => Err(JsonRpcResponse::failure(
                reply_id,
                RpcError::invalid_request("method must be a string"),
            )),
        }
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{message} ({code})")]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn parse_error(detail: impl Into<String>) -> Self {
        Self::new(PARSE_ERROR, "Parse error").with_data(Value::String(detail.into()))
    }

    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::new(INVALID_REQUEST, "Invalid Request").with_data(Value::String(detail.into()))
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, detail)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// What goes back over the wire for one POST body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Single(JsonRpcResponse),
    Batch(Vec<JsonRpcResponse>),
}

// ==================== MCP Types ====================

/// MCP Initialize response result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

/// Capabilities advertised by this server
#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
    pub list_changed: bool,
}

/// Server info
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Tool descriptor in `tools/list` results.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result of `tools/call`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

/// Parameters of `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default = "empty_arguments")]
    pub arguments: Value,
}

fn empty_arguments() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(message: Value) -> JsonRpcRequest {
        match IncomingMessage::from_value(message).unwrap() {
            IncomingMessage::Call(req) => req,
            IncomingMessage::Reply => panic!("expected a call"),
        }
    }

    #[test]
    fn request_with_id_is_not_a_notification() {
        let req = call(json!({ "jsonrpc": "2.0", "id": 7, "method": "ping" }));
        assert_eq!(req.id, Some(json!(7)));
        assert_eq!(req.params, Value::Null);
    }

    #[test]
    fn message_without_id_is_a_notification() {
        let req = call(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }));
        assert_eq!(req.id, None);
    }

    #[test]
    fn wrong_version_is_invalid_request_and_keeps_id() {
        let err = IncomingMessage::from_value(json!({ "jsonrpc": "1.0", "id": "a", "method": "ping" }))
            .unwrap_err();
        assert_eq!(err.id, json!("a"));
        assert_eq!(err.error.unwrap().code, INVALID_REQUEST);
    }

    #[test]
    fn non_object_is_invalid_request() {
        let err = IncomingMessage::from_value(json!("hello")).unwrap_err();
        assert_eq!(err.id, Value::Null);
        assert_eq!(err.error.unwrap().code, INVALID_REQUEST);
    }

    #[test]
    fn client_reply_is_recognised() {
        let msg = IncomingMessage::from_value(json!({ "jsonrpc": "2.0", "id": 1, "result": {} }))
            .unwrap();
        assert_eq!(msg, IncomingMessage::Reply);
    }

    #[test]
    fn response_serialization_omits_empty_fields() {
        let ok = serde_json::to_value(JsonRpcResponse::success(json!(1), json!({}))).unwrap();
        assert_eq!(ok, json!({ "jsonrpc": "2.0", "id": 1, "result": {} }));

        let err = serde_json::to_value(JsonRpcResponse::failure(
            json!(2),
            RpcError::method_not_found("nope"),
        ))
        .unwrap();
        assert_eq!(
            err,
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "error": { "code": -32601, "message": "Method not found: nope" }
            })
        );
    }

    #[test]
    fn tool_result_wire_shape() {
        let value = serde_json::to_value(ToolResult::text("hi")).unwrap();
        assert_eq!(
            value,
            json!({ "content": [{ "type": "text", "text": "hi" }], "isError": false })
        );
    }

    #[test]
    fn call_params_default_arguments() {
        let params: CallToolParams = serde_json::from_value(json!({ "name": "greet" })).unwrap();
        assert_eq!(params.arguments, json!({}));
    }
}
