//! MCP and JSON-RPC protocol types

mod jsonrpc;
mod mcp;

pub use jsonrpc::{ErrorObject, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use mcp::{McpTool, ServerInfo, Tool};
