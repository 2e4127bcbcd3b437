//! Create relations tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::types::Relation;

/// Tool for creating directed relations between entities
pub struct CreateRelationsTool {
    store: Arc<GraphStore>,
}

impl CreateRelationsTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for CreateRelationsTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "create_relations".to_string(),
            description: "Create directed relations between entities. Missing endpoints are stub-created with type 'unknown'; an existing triple is reported as already present.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "relations": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "from": { "type": "string", "description": "Source entity name" },
                                "to": { "type": "string", "description": "Target entity name" },
                                "relationType": { "type": "string", "description": "The type of the relation" }
                            },
                            "required": ["from", "to", "relationType"]
                        }
                    }
                },
                "required": ["relations"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let relations: Vec<Relation> =
            serde_json::from_value(params.get("relations").cloned().unwrap_or(json!([])))?;
        let changes = self.store.create_relations(relations)?;
        Ok(text_response(serde_json::to_string_pretty(&changes)?))
    }
}
