//! Search nodes tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;

/// Tool for ranked substring search over the knowledge graph
pub struct SearchNodesTool {
    store: Arc<GraphStore>,
}

impl SearchNodesTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for SearchNodesTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "search_nodes".to_string(),
            description: "Search for nodes in the knowledge graph. Case-insensitive substring match over name, type, observations and relations, ranked by relevance.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let query = params.get("query").and_then(|v| v.as_str()).unwrap_or("");
        let results = self.store.search_nodes(query);
        Ok(text_response(serde_json::to_string_pretty(&results)?))
    }
}
