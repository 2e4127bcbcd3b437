//! Search files tool

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ToolResult;
use crate::fs::FsOps;
use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::required_str;

/// Default cap on returned matches
const DEFAULT_MAX_RESULTS: usize = 100;

/// Tool for glob search under a directory
pub struct SearchFilesTool {
    ops: Arc<FsOps>,
}

impl SearchFilesTool {
    pub fn new(ops: Arc<FsOps>) -> Self {
        Self { ops }
    }
}

impl Tool for SearchFilesTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "search_files".to_string(),
            description: "Search a directory recursively for entries matching a glob pattern. Reports the true total match count even when results are truncated.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Directory to search under" },
                    "pattern": { "type": "string", "description": "Glob pattern, e.g. *.txt" },
                    "maxResults": { "type": "integer", "description": "Maximum matches to return (default: 100)" }
                },
                "required": ["path", "pattern"]
            }),
        }
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let path = required_str(&params, "path")?;
        let pattern = required_str(&params, "pattern")?;
        let max_results = params
            .get("maxResults")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_MAX_RESULTS);

        let report = self.ops.search(Path::new(&path), &pattern, max_results)?;

        let mut text = report.matches.join("\n");
        if report.truncated() {
            text.push_str(&format!(
                "\n\nShowing {} of {} matches",
                report.matches.len(),
                report.total_matches
            ));
        } else if report.matches.is_empty() {
            text = "No matches found".to_string();
        }
        Ok(text_response(text))
    }
}
