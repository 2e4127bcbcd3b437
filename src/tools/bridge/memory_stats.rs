//! Filesystem memory stats tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::bridge::memory_stats;
use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;

/// Tool reporting counts of tracked filesystem activity
pub struct GetFilesystemMemoryStatsTool {
    store: Arc<GraphStore>,
}

impl GetFilesystemMemoryStatsTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for GetFilesystemMemoryStatsTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "get_filesystem_memory_stats".to_string(),
            description: "Counts of tracked files, directories, relations, and files accessed in the last 24 hours".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    fn execute(&self, _params: Value) -> ToolResult<Value> {
        let stats = memory_stats(&self.store);
        Ok(text_response(serde_json::to_string_pretty(&stats)?))
    }
}
