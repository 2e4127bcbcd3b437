//! MCP tool implementations, organized by category:
//! - Memory tools (9): knowledge-graph CRUD and search
//! - Filesystem tools (14): sandboxed file operations and
//!   allowed-directory management
//! - Bridge tools (3): queries over recorded filesystem activity

pub mod bridge;
pub mod filesystem;
pub mod memory;

use std::sync::Arc;

use serde_json::Value;

use crate::error::{ToolError, ToolResult};
use crate::fs::FsOps;
use crate::graph::GraphStore;
use crate::server::McpServer;

pub use bridge::{FindSimilarFilesTool, GetFilesystemMemoryStatsTool, RecallFileHistoryTool};
pub use filesystem::{
    AddAllowedDirectoryTool, CreateDirectoryTool, DirectoryTreeTool, EditFileTool,
    GetFileInfoTool, ListAllowedDirectoriesTool, ListDirectoryTool, ListDirectoryWithSizesTool,
    MoveFileTool, ReadFileTool, ReadMultipleFilesTool, RemoveAllowedDirectoryTool,
    SearchFilesTool, WriteFileTool,
};
pub use memory::{
    AddObservationsTool, CreateEntitiesTool, CreateRelationsTool, DeleteEntitiesTool,
    DeleteObservationsTool, DeleteRelationsTool, OpenNodesTool, ReadGraphTool, SearchNodesTool,
};

/// Extract a required string argument
pub(crate) fn required_str(params: &Value, key: &str) -> ToolResult<String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| ToolError::InvalidArgument(format!("missing required argument '{key}'")))
}

/// Register the knowledge-graph memory tools (9)
pub fn register_memory_tools(server: &mut McpServer, store: Arc<GraphStore>) {
    server.register_tool(Box::new(CreateEntitiesTool::new(store.clone())));
    server.register_tool(Box::new(CreateRelationsTool::new(store.clone())));
    server.register_tool(Box::new(AddObservationsTool::new(store.clone())));
    server.register_tool(Box::new(DeleteEntitiesTool::new(store.clone())));
    server.register_tool(Box::new(DeleteObservationsTool::new(store.clone())));
    server.register_tool(Box::new(DeleteRelationsTool::new(store.clone())));
    server.register_tool(Box::new(ReadGraphTool::new(store.clone())));
    server.register_tool(Box::new(SearchNodesTool::new(store.clone())));
    server.register_tool(Box::new(OpenNodesTool::new(store)));
}

/// Register the sandboxed filesystem tools (14)
pub fn register_filesystem_tools(server: &mut McpServer, ops: Arc<FsOps>) {
    server.register_tool(Box::new(ReadFileTool::new(ops.clone())));
    server.register_tool(Box::new(ReadMultipleFilesTool::new(ops.clone())));
    server.register_tool(Box::new(WriteFileTool::new(ops.clone())));
    server.register_tool(Box::new(EditFileTool::new(ops.clone())));
    server.register_tool(Box::new(CreateDirectoryTool::new(ops.clone())));
    server.register_tool(Box::new(ListDirectoryTool::new(ops.clone())));
    server.register_tool(Box::new(ListDirectoryWithSizesTool::new(ops.clone())));
    server.register_tool(Box::new(DirectoryTreeTool::new(ops.clone())));
    server.register_tool(Box::new(MoveFileTool::new(ops.clone())));
    server.register_tool(Box::new(SearchFilesTool::new(ops.clone())));
    server.register_tool(Box::new(GetFileInfoTool::new(ops.clone())));
    server.register_tool(Box::new(ListAllowedDirectoriesTool::new(ops.clone())));
    server.register_tool(Box::new(AddAllowedDirectoryTool::new(ops.clone())));
    server.register_tool(Box::new(RemoveAllowedDirectoryTool::new(ops)));
}

/// Register the bridge query tools (3)
pub fn register_bridge_tools(server: &mut McpServer, store: Arc<GraphStore>) {
    server.register_tool(Box::new(RecallFileHistoryTool::new(store.clone())));
    server.register_tool(Box::new(FindSimilarFilesTool::new(store.clone())));
    server.register_tool(Box::new(GetFilesystemMemoryStatsTool::new(store)));
}

/// Register every tool against one shared graph store (the composite
/// server)
pub fn register_all_tools(server: &mut McpServer, store: Arc<GraphStore>, ops: Arc<FsOps>) {
    register_memory_tools(server, store.clone());
    register_filesystem_tools(server, ops);
    register_bridge_tools(server, store);
}
