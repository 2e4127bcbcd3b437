//! Move file tool

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Tool for moving or renaming files and directories
pub struct MoveFileTool {
    ops: Arc<FsOps>,
}

impl MoveFileTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for MoveFileTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "move_file".to_string(),
            description: "Move or rename a file or directory. Both endpoints must be inside the sandbox; the destination's parent is created as needed.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "source": { "type": "string", "description": "Path to move from" },
                    "destination": { "type": "string", "description": "Path to move to" }
                },
                "required": ["source", "destination"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let source = required_str(&params, "source")?;
        let destination = required_str(&params, "destination")?;
        self.ops
            .move_path(Path::new(&source), Path::new(&destination))?;
        Ok(text_response(format!("Moved {source} to {destination}")))
    }
}
