//! HTTP API for the hello agent.
//!
//! ## Endpoints
//!
//! - `POST /api/hello` - Greet the `name` in the JSON body (default `world`)
//! - `GET /api/hello?name=` - Same greeting, name taken from the query string
//! - `GET /health` - Liveness probe
//! - `POST /mcp` - MCP tool surface (JSON-RPC 2.0), mounted only when enabled

#[cfg(feature = "mcp")]
pub mod mcp;
mod routes;
pub mod types;

pub use routes::{router, serve, AppState};
pub use types::*;
