//! # Hello Agent
//!
//! A greeting service with an optional tool-calling surface.
//!
//! This library provides:
//! - An HTTP API that forwards a name to the greeting agent
//! - An MCP (Model Context Protocol) endpoint exposing the same agent as a tool
//! - A liveness probe for orchestrators
//!
//! ## Architecture
//!
//! ```text
//!   POST /api/hello ──┐
//!                     ├──▶ HelloAgent::greet ──▶ "Hello, {name}! ..."
//!   POST /mcp ────────┘   (tools/call greet)
//! ```
//!
//! ## Modules
//! - `agent`: The greeting agent
//! - `api`: HTTP routes and server lifecycle
//! - `mcp`: JSON-RPC 2.0 / MCP message handling (feature `mcp`)
//! - `tools`: Tool trait and registry backing the MCP surface (feature `mcp`)

pub mod agent;
pub mod api;
pub mod config;
#[cfg(feature = "mcp")]
pub mod mcp;
#[cfg(feature = "mcp")]
pub mod tools;

pub use agent::HelloAgent;
pub use config::Config;
