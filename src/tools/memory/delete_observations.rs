//! Delete observations tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::types::ObservationDeletion;

/// Tool for removing exact-string observations from entities
pub struct DeleteObservationsTool {
    store: Arc<GraphStore>,
}

impl DeleteObservationsTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for DeleteObservationsTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "delete_observations".to_string(),
            description: "Delete exact-string observations from entities. Fails if an entity does not exist.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "deletions": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "entityName": { "type": "string", "description": "The entity to delete observations from" },
                                "observations": {
                                    "type": "array",
                                    "items": { "type": "string" },
                                    "description": "Observation strings to remove"
                                }
                            },
                            "required": ["entityName", "observations"]
                        }
                    }
                },
                "required": ["deletions"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let deletions: Vec<ObservationDeletion> =
            serde_json::from_value(params.get("deletions").cloned().unwrap_or(json!([])))?;
        let removed = self.store.delete_observations(deletions)?;
        Ok(text_response(format!("{removed} observation(s) deleted")))
    }
}
