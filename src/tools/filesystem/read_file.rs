//! Read file tool

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Tool for reading a file inside the sandbox
pub struct ReadFileTool {
    ops: Arc<FsOps>,
}

impl ReadFileTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for ReadFileTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "read_file".to_string(),
            description: "Read the complete contents of a file from an allowed directory".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path of the file to read" }
                },
                "required": ["path"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let content = self.ops.read(Path::new(&path))?;
        Ok(text_response(content))
    }
}
