//! Create directory tool

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Tool for creating a directory (and its parents) in the sandbox
pub struct CreateDirectoryTool {
    ops: Arc<FsOps>,
}

impl CreateDirectoryTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for CreateDirectoryTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "create_directory".to_string(),
            description: "Create a directory, including missing parents".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path of the directory to create" }
                },
                "required": ["path"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        self.ops.mkdir(Path::new(&path))?;
        Ok(text_response(format!("Created directory {path}")))
    }
}
