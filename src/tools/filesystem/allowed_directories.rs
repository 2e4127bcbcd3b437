//! Allowed-directory management tools

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::bridge::FsEvent;
use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::sandbox::AddOutcome;
use crate::server::text_response;
use crate::tools::required_str;

/// Tool listing the current allowed directories
pub struct ListAllowedDirectoriesTool {
    ops: Arc<FsOps>,
}

impl ListAllowedDirectoriesTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for ListAllowedDirectoriesTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "list_allowed_directories".to_string(),
            description: "List the directories this server is allowed to access".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    fn execute(&self, _params: Value) -> ToolResult<Value> {
        let dirs = self.ops.sandbox().list();
        let lines: Vec<String> = dirs.iter().map(|d| d.display().to_string()).collect();
        Ok(text_response(format!(
            "Allowed directories ({}):\n{}",
            lines.len(),
            lines.join("\n")
        )))
    }
}

/// Tool appending a directory to the allowed set
pub struct AddAllowedDirectoryTool {
    ops: Arc<FsOps>,
}

impl AddAllowedDirectoryTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for AddAllowedDirectoryTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "add_allowed_directory".to_string(),
            description: "Add a directory to the allowed set. The directory must exist; adding one already allowed is a no-op.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Directory to allow" }
                },
                "required": ["path"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let message = match self.ops.sandbox().add_directory(Path::new(&path))? {
            AddOutcome::Added(normalized) => {
                self.ops
                    .notifier
                    .record(&FsEvent::directory(normalized, "add_allowed_directory"));
                format!("Added {path} to allowed directories")
            }
            AddOutcome::AlreadyAllowed(_) => format!("{path} is already in the allowed list"),
        };
        Ok(text_response(message))
    }
}

/// Tool removing a directory from the allowed set
pub struct RemoveAllowedDirectoryTool {
    ops: Arc<FsOps>,
}

impl RemoveAllowedDirectoryTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for RemoveAllowedDirectoryTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "remove_allowed_directory".to_string(),
            description: "Remove a directory from the allowed set. The last remaining directory cannot be removed.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Directory to remove" }
                },
                "required": ["path"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let removed = self.ops.sandbox().remove_directory(Path::new(&path))?;
        // History is kept: the directory entity gains an observation
        // instead of being deleted
        self.ops
            .notifier
            .record(&FsEvent::directory(removed, "remove_allowed_directory"));
        Ok(text_response(format!(
            "Removed {path} from allowed directories"
        )))
    }
}
