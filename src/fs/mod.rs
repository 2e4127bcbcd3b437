//! Sandboxed filesystem operation layer
//!
//! Every operation validates its path(s) through the sandbox before
//! touching the disk, performs the OS-level effect, and only on
//! success notifies the bridge. Access-denied attempts therefore leave
//! no trace in the graph.

mod ops;

pub use ops::{EditOp, EditReport, MultiReadEntry, SearchReport};

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::bridge::Notifier;
use crate::error::ToolResult;
use crate::sandbox::PathSandbox;

/// Filesystem operations gated by a path sandbox
pub struct FsOps {
    pub(crate) sandbox: Arc<PathSandbox>,
    pub(crate) notifier: Arc<dyn Notifier>,
}

impl FsOps {
    pub fn new(sandbox: Arc<PathSandbox>, notifier: Arc<dyn Notifier>) -> Self {
        Self { sandbox, notifier }
    }

    /// The sandbox gating this layer
    pub fn sandbox(&self) -> &PathSandbox {
        &self.sandbox
    }

    pub fn read(&self, path: &Path) -> ToolResult<String> {
        ops::read(self, path)
    }

    pub fn read_many(&self, paths: &[String]) -> Vec<MultiReadEntry> {
        ops::read_many(self, paths)
    }

    pub fn write(&self, path: &Path, content: &str) -> ToolResult<()> {
        ops::write(self, path, content)
    }

    pub fn edit(&self, path: &Path, edits: Vec<EditOp>, dry_run: bool) -> ToolResult<EditReport> {
        ops::edit(self, path, edits, dry_run)
    }

    pub fn mkdir(&self, path: &Path) -> ToolResult<()> {
        ops::mkdir(self, path)
    }

    pub fn list(&self, path: &Path) -> ToolResult<Vec<String>> {
        ops::list(self, path, false)
    }

    pub fn list_with_sizes(&self, path: &Path) -> ToolResult<Vec<String>> {
        ops::list(self, path, true)
    }

    pub fn tree(&self, path: &Path, max_depth: usize) -> ToolResult<Value> {
        ops::tree(self, path, max_depth)
    }

    pub fn move_path(&self, source: &Path, destination: &Path) -> ToolResult<()> {
        ops::move_path(self, source, destination)
    }

    pub fn search(
        &self,
        path: &Path,
        pattern: &str,
        max_results: usize,
    ) -> ToolResult<SearchReport> {
        ops::search(self, path, pattern, max_results)
    }

    pub fn stat(&self, path: &Path) -> ToolResult<Value> {
        ops::stat(self, path)
    }
}
