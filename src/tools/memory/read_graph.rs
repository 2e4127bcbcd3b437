//! Read graph tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;

/// Tool for reading the entire knowledge graph
pub struct ReadGraphTool {
    store: Arc<GraphStore>,
}

impl ReadGraphTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for ReadGraphTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "read_graph".to_string(),
            description: "Read the entire knowledge graph".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    fn execute(&self, _params: Value) -> ToolResult<Value> {
        let graph = self.store.read_graph();
        Ok(text_response(serde_json::to_string_pretty(&graph)?))
    }
}
