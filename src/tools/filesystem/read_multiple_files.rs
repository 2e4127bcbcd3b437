//! Read multiple files tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;

/// Tool for reading a batch of files; one failing path never aborts
/// the others
pub struct ReadMultipleFilesTool {
    ops: Arc<FsOps>,
}

impl ReadMultipleFilesTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for ReadMultipleFilesTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "read_multiple_files".to_string(),
            description: "Read several files at once. A failing path is reported inline as that item's result and does not abort the batch.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "paths": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Paths of the files to read"
                    }
                },
                "required": ["paths"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let paths: Vec<String> =
            serde_json::from_value(params.get("paths").cloned().unwrap_or(json!([])))?;

        let sections: Vec<String> = self
            .ops
            .read_many(&paths)
            .into_iter()
            .map(|entry| match entry.result {
                Ok(content) => format!("{}:\n{}", entry.path, content),
                Err(message) => format!("{}: Error - {}", entry.path, message),
            })
            .collect();

        Ok(text_response(sections.join("\n---\n")))
    }
}
