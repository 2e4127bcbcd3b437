//! Write file tool

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Tool for writing a file inside the sandbox
pub struct WriteFileTool {
    ops: Arc<FsOps>,
}

impl WriteFileTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for WriteFileTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "write_file".to_string(),
            description: "Create or overwrite a file. Parent directories are created as needed.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path of the file to write" },
                    "content": { "type": "string", "description": "Content to write" }
                },
                "required": ["path", "content"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let content = required_str(&params, "content")?;
        self.ops.write(Path::new(&path), &content)?;
        Ok(text_response(format!(
            "Wrote {} bytes to {}",
            content.len(),
            path
        )))
    }
}
