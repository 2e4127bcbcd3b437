//! MCP (Model Context Protocol) types

use serde::Serialize;
use serde_json::Value;

use crate::error::ToolResult;

/// MCP Tool definition
#[derive(Serialize, Debug, Clone)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Server information for MCP handshake
#[derive(Clone, Debug)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    /// Create new server info
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self::new("memory-fs", env!("CARGO_PKG_VERSION"))
    }
}

/// Trait for MCP tools
///
/// All tools must implement this trait to be registered with the
/// server. A returned `Err` crosses the protocol boundary as an
/// `isError` tool result, not a JSON-RPC error.
pub trait Tool: Send + Sync {
    /// Get the tool definition for tools/list
    fn definition(&self) -> McpTool;

    /// Execute the tool with the given arguments
    fn execute(&self, params: Value) -> ToolResult<Value>;

    /// Get the tool name (convenience method)
    fn name(&self) -> String {
        self.definition().name
    }
}
