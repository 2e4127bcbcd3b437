//! Add observations tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::types::Observation;

/// Tool for adding observations to existing entities
pub struct AddObservationsTool {
    store: Arc<GraphStore>,
}

impl AddObservationsTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for AddObservationsTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "add_observations".to_string(),
            description: "Add observations to existing entities. Duplicate strings are dropped; fails if an entity does not exist.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "observations": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "entityName": { "type": "string", "description": "The entity to add observations to" },
                                "contents": {
                                    "type": "array",
                                    "items": { "type": "string" },
                                    "description": "Observation strings to add"
                                }
                            },
                            "required": ["entityName", "contents"]
                        }
                    }
                },
                "required": ["observations"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let observations: Vec<Observation> =
            serde_json::from_value(params.get("observations").cloned().unwrap_or(json!([])))?;
        let added = self.store.add_observations(observations)?;

        let total: usize = added.iter().map(|o| o.contents.len()).sum();
        let mut report = serde_json::to_string_pretty(&added)?;
        report.push_str(&format!("\n\n{total} observation(s) added"));
        Ok(text_response(report))
    }
}
