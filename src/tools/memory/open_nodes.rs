//! Open nodes tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;

/// Tool for retrieving specific entities by name
pub struct OpenNodesTool {
    store: Arc<GraphStore>,
}

impl OpenNodesTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for OpenNodesTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "open_nodes".to_string(),
            description: "Open specific nodes by name. Names with no match are silently omitted.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "names": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Entity names to retrieve"
                    }
                },
                "required": ["names"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let names: Vec<String> =
            serde_json::from_value(params.get("names").cloned().unwrap_or(json!([])))?;
        let graph = self.store.open_nodes(names);
        Ok(text_response(serde_json::to_string_pretty(&graph)?))
    }
}
