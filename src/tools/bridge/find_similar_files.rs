//! Find similar files tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::bridge::find_similar_files;
use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Default result cap
const DEFAULT_LIMIT: usize = 10;

/// Tool ranking tracked files against a query
pub struct FindSimilarFilesTool {
    store: Arc<GraphStore>,
}

impl FindSimilarFilesTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for FindSimilarFilesTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "find_similar_files".to_string(),
            description: "Search tracked file entities by relevance to a query".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "The search query" },
                    "limit": { "type": "integer", "description": "Maximum results (default: 10)" }
                },
                "required": ["query"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let query = required_str(&params, "query")?;
        let limit = params
            .get("limit")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT);

        let results = find_similar_files(&self.store, &query, limit);
        Ok(text_response(serde_json::to_string_pretty(&results)?))
    }
}
