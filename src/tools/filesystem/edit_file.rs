//! Edit file tool

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::{EditOp, FsOps};
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Tool for ordered literal substring replacements in a file
pub struct EditFileTool {
    ops: Arc<FsOps>,
}

impl EditFileTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for EditFileTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "edit_file".to_string(),
            description: "Apply ordered literal text replacements to a file. Each edit sees the content as modified by the edits before it; dryRun reports sizes without touching disk.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path of the file to edit" },
                    "edits": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "oldText": { "type": "string", "description": "Exact text to replace" },
                                "newText": { "type": "string", "description": "Replacement text" }
                            },
                            "required": ["oldText", "newText"]
                        }
                    },
                    "dryRun": { "type": "boolean", "description": "Preview without writing (default: false)" }
                },
                "required": ["path", "edits"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let edits: Vec<EditOp> =
            serde_json::from_value(params.get("edits").cloned().unwrap_or(json!([])))?;
        let dry_run = params
            .get("dryRun")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let report = self.ops.edit(Path::new(&path), edits, dry_run)?;
        Ok(text_response(serde_json::to_string_pretty(&report)?))
    }
}
