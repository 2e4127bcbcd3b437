//! Delete entities tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;

/// Tool for deleting entities and every relation pointing at them
pub struct DeleteEntitiesTool {
    store: Arc<GraphStore>,
}

impl DeleteEntitiesTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for DeleteEntitiesTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "delete_entities".to_string(),
            description: "Delete entities by name. Relations in other entities pointing at a deleted entity are removed as well.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "entityNames": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Names of entities to delete"
                    }
                },
                "required": ["entityNames"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let names: Vec<String> =
            serde_json::from_value(params.get("entityNames").cloned().unwrap_or(json!([])))?;
        let removed = self.store.delete_entities(names)?;
        Ok(text_response(format!("{removed} entity(ies) deleted")))
    }
}
