//! Create entities tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::types::Entity;

/// Tool for creating multiple new entities in the knowledge graph
pub struct CreateEntitiesTool {
    store: Arc<GraphStore>,
}

impl CreateEntitiesTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for CreateEntitiesTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "create_entities".to_string(),
            description: "Create multiple new entities in the knowledge graph. Observations of an existing entity are merged, not duplicated.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "entities": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string", "description": "The name of the entity" },
                                "entityType": { "type": "string", "description": "The type of the entity" },
                                "observations": {
                                    "type": "array",
                                    "items": { "type": "string" },
                                    "description": "Initial observations about the entity"
                                }
                            },
                            "required": ["name", "entityType"]
                        }
                    }
                },
                "required": ["entities"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let entities: Vec<Entity> =
            serde_json::from_value(params.get("entities").cloned().unwrap_or(json!([])))?;
        let changes = self.store.create_entities(entities)?;
        Ok(text_response(serde_json::to_string_pretty(&changes)?))
    }
}
