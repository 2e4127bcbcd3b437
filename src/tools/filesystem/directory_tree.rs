//! Directory tree tool

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Default recursion depth for directory_tree
const DEFAULT_TREE_DEPTH: usize = 3;

/// Tool for a depth-bounded recursive directory tree
pub struct DirectoryTreeTool {
    ops: Arc<FsOps>,
}

impl DirectoryTreeTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for DirectoryTreeTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "directory_tree".to_string(),
            description: "Recursive JSON tree of a directory. Unreadable subtrees become inline error nodes instead of aborting the tree.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Root directory of the tree" },
                    "maxDepth": { "type": "integer", "description": "Maximum recursion depth (default: 3)" }
                },
                "required": ["path"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let max_depth = params
            .get("maxDepth")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_TREE_DEPTH);

        let tree = self.ops.tree(Path::new(&path), max_depth)?;
        Ok(text_response(serde_json::to_string_pretty(&tree)?))
    }
}
