//! Recall file history tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::bridge::recall_file_history;
use crate::error::ToolResult;
use crate::graph::GraphStore;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Tool returning the recorded activity for one file path
pub struct RecallFileHistoryTool {
    store: Arc<GraphStore>,
}

impl RecallFileHistoryTool {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Tool for RecallFileHistoryTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "recall_file_history".to_string(),
            description: "Recall the recorded activity (observations and relations) for a file path. This is observed history, not the file's live state.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filePath": { "type": "string", "description": "Path of the file to recall" }
                },
                "required": ["filePath"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let file_path = required_str(&params, "filePath")?;
        let entity = recall_file_history(&self.store, &file_path)?;
        Ok(text_response(serde_json::to_string_pretty(&entity)?))
    }
}
