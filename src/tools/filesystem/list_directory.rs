//! Directory listing tools

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Tool for listing a directory's entries
pub struct ListDirectoryTool {
    ops: Arc<FsOps>,
}

impl ListDirectoryTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for ListDirectoryTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "list_directory".to_string(),
            description: "List the entries of a directory, marked [FILE] or [DIR]".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path of the directory to list" }
                },
                "required": ["path"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let entries = self.ops.list(Path::new(&path))?;
        Ok(text_response(entries.join("\n")))
    }
}

/// Tool for listing a directory's entries with file sizes
pub struct ListDirectoryWithSizesTool {
    ops: Arc<FsOps>,
}

impl ListDirectoryWithSizesTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for ListDirectoryWithSizesTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "list_directory_with_sizes".to_string(),
            description: "List the entries of a directory with file sizes in bytes".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path of the directory to list" }
                },
                "required": ["path"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let entries = self.ops.list_with_sizes(Path::new(&path))?;
        Ok(text_response(entries.join("\n")))
    }
}
