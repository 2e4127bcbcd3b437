//! File info tool

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Tool for file/directory metadata
pub struct GetFileInfoTool {
    ops: Arc<FsOps>,
}

impl GetFileInfoTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for GetFileInfoTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "get_file_info".to_string(),
            description: "Get size, timestamps and type information for a file or directory".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path to inspect" }
                },
                "required": ["path"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let info = self.ops.stat(Path::new(&path))?;
        Ok(text_response(serde_json::to_string_pretty(&info)?))
    }
}
