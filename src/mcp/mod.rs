//! MCP (Model Context Protocol) server.
//!
//! Serves the tool registry over JSON-RPC 2.0. The HTTP transport lives in
//! `api::mcp`; this module only turns incoming JSON messages into replies.

mod server;
pub mod types;

pub use server::{negotiate_protocol_version, McpServer, SERVER_NAME, SUPPORTED_PROTOCOL_VERSIONS};
pub use types::*;
