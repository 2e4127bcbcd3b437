//! Filesystem operation implementations

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use globset::GlobBuilder;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use walkdir::WalkDir;

use crate::bridge::FsEvent;
use crate::error::{ToolError, ToolResult};

use super::FsOps;

/// Depth cap for the search_files walk
const SEARCH_MAX_DEPTH: usize = 10;

/// One literal substring replacement in an edit_file batch
#[derive(Debug, Clone, Deserialize)]
pub struct EditOp {
    #[serde(rename = "oldText")]
    pub old_text: String,
    #[serde(rename = "newText")]
    pub new_text: String,
}

/// Result of an edit_file call
#[derive(Debug, Clone, Serialize)]
pub struct EditReport {
    pub path: String,
    #[serde(rename = "editsApplied")]
    pub edits_applied: usize,
    #[serde(rename = "bytesBefore")]
    pub bytes_before: usize,
    #[serde(rename = "bytesAfter")]
    pub bytes_after: usize,
    #[serde(rename = "dryRun")]
    pub dry_run: bool,
}

/// One entry of a read_multiple_files batch
#[derive(Debug, Clone)]
pub struct MultiReadEntry {
    pub path: String,
    /// File content, or the error message for this one path
    pub result: Result<String, String>,
}

/// Result of a search_files call
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub matches: Vec<String>,
    /// True total match count, even when `matches` was truncated
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

impl SearchReport {
    pub fn truncated(&self) -> bool {
        self.matches.len() < self.total_matches
    }
}

/// Map an io error on a specific path into the taxonomy
fn io_error(path: &Path, e: io::Error) -> ToolError {
    if e.kind() == io::ErrorKind::NotFound {
        ToolError::NotFound(path.display().to_string())
    } else {
        ToolError::Io(e)
    }
}

pub fn read(ops: &FsOps, path: &Path) -> ToolResult<String> {
    let path = ops.sandbox.validate(path)?;
    let content = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;

    ops.notifier.record(
        &FsEvent::file(path, "read_file")
            .with_size(content.len() as u64)
            .with_content(content.clone()),
    );
    Ok(content)
}

/// Read a batch of files; a failing path never aborts the others.
pub fn read_many(ops: &FsOps, paths: &[String]) -> Vec<MultiReadEntry> {
    paths
        .iter()
        .map(|p| MultiReadEntry {
            path: p.clone(),
            result: read(ops, Path::new(p)).map_err(|e| e.to_string()),
        })
        .collect()
}

pub fn write(ops: &FsOps, path: &Path, content: &str) -> ToolResult<()> {
    let path = ops.sandbox.validate(path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;

    ops.notifier.record(
        &FsEvent::file(path, "write_file")
            .with_size(content.len() as u64)
            .with_content(content),
    );
    Ok(())
}

/// Apply ordered literal replacements; each edit sees the content as
/// modified by the edits before it. dryRun reports sizes without
/// touching disk.
pub fn edit(ops: &FsOps, path: &Path, edits: Vec<EditOp>, dry_run: bool) -> ToolResult<EditReport> {
    let path = ops.sandbox.validate(path)?;
    let original = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;

    let mut content = original.clone();
    for op in &edits {
        if !content.contains(&op.old_text) {
            return Err(ToolError::TextNotFound {
                path: path.display().to_string(),
                text: op.old_text.clone(),
            });
        }
        content = content.replacen(&op.old_text, &op.new_text, 1);
    }

    let report = EditReport {
        path: path.display().to_string(),
        edits_applied: edits.len(),
        bytes_before: original.len(),
        bytes_after: content.len(),
        dry_run,
    };

    if !dry_run {
        fs::write(&path, &content)?;
        ops.notifier.record(
            &FsEvent::file(path, "edit_file")
                .with_size(content.len() as u64)
                .with_content(content),
        );
    }
    Ok(report)
}

pub fn mkdir(ops: &FsOps, path: &Path) -> ToolResult<()> {
    let path = ops.sandbox.validate(path)?;
    fs::create_dir_all(&path)?;

    ops.notifier
        .record(&FsEvent::directory(path, "create_directory"));
    Ok(())
}

pub fn list(ops: &FsOps, path: &Path, with_sizes: bool) -> ToolResult<Vec<String>> {
    let path = ops.sandbox.validate(path)?;
    let mut entries = Vec::new();

    for entry in fs::read_dir(&path).map_err(|e| io_error(&path, e))? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        let metadata = entry.metadata()?;
        let line = if metadata.is_dir() {
            format!("[DIR] {name}")
        } else if with_sizes {
            format!("[FILE] {name} ({} bytes)", metadata.len())
        } else {
            format!("[FILE] {name}")
        };
        entries.push(line);
    }
    entries.sort();

    let operation = if with_sizes {
        "list_directory_with_sizes"
    } else {
        "list_directory"
    };
    ops.notifier.record(&FsEvent::directory(path, operation));
    Ok(entries)
}

/// Depth-bounded recursive tree.
///
/// Non-directory leaves are reported as their basename; a subtree that
/// fails to read becomes an inline error node instead of aborting the
/// whole tree.
pub fn tree(ops: &FsOps, path: &Path, max_depth: usize) -> ToolResult<Value> {
    let path = ops.sandbox.validate(path)?;
    if !path.is_dir() {
        return Err(ToolError::NotADirectory(path.display().to_string()));
    }

    let value = tree_node(&path, max_depth);
    ops.notifier.record(&FsEvent::directory(path, "directory_tree"));
    Ok(value)
}

fn tree_node(path: &Path, depth_left: usize) -> Value {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    if !path.is_dir() {
        return json!({ "name": name, "type": "file" });
    }
    if depth_left == 0 {
        return json!({ "name": name, "type": "directory", "children": "..." });
    }

    match fs::read_dir(path) {
        Ok(read) => {
            let mut children: Vec<Value> = Vec::new();
            let mut paths: Vec<PathBuf> = read.filter_map(|e| e.ok().map(|e| e.path())).collect();
            paths.sort();
            for child in paths {
                children.push(tree_node(&child, depth_left - 1));
            }
            json!({ "name": name, "type": "directory", "children": children })
        }
        Err(e) => json!({ "name": name, "type": "error", "error": e.to_string() }),
    }
}

pub fn move_path(ops: &FsOps, source: &Path, destination: &Path) -> ToolResult<()> {
    let source = ops.sandbox.validate(source)?;
    let destination = ops.sandbox.validate(destination)?;

    let was_dir = source.is_dir();
    if !source.exists() {
        return Err(ToolError::NotFound(source.display().to_string()));
    }
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(&source, &destination)?;

    let event = if was_dir {
        FsEvent::directory(destination, "move_file")
    } else {
        FsEvent::file(destination, "move_file")
    };
    ops.notifier.record(&event);
    Ok(())
}

/// Glob search under a directory, depth-capped.
///
/// Reports the true total match count even when the returned list is
/// truncated to `max_results`, so callers can tell truncation
/// occurred.
pub fn search(
    ops: &FsOps,
    path: &Path,
    pattern: &str,
    max_results: usize,
) -> ToolResult<SearchReport> {
    let path = ops.sandbox.validate(path)?;
    let glob = GlobBuilder::new(pattern)
        .literal_separator(false)
        .case_insensitive(true)
        .build()?
        .compile_matcher();

    let mut matches = Vec::new();
    let mut total = 0;
    for entry in WalkDir::new(&path)
        .max_depth(SEARCH_MAX_DEPTH)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path() == path {
            continue;
        }
        let name_match = glob.is_match(entry.file_name());
        let rel_match = entry
            .path()
            .strip_prefix(&path)
            .map(|rel| glob.is_match(rel))
            .unwrap_or(false);
        if name_match || rel_match {
            total += 1;
            if matches.len() < max_results {
                matches.push(entry.path().display().to_string());
            }
        }
    }

    ops.notifier.record(&FsEvent::directory(path, "search_files"));
    Ok(SearchReport {
        matches,
        total_matches: total,
    })
}

pub fn stat(ops: &FsOps, path: &Path) -> ToolResult<Value> {
    let path = ops.sandbox.validate(path)?;
    let metadata = fs::metadata(&path).map_err(|e| io_error(&path, e))?;

    let info = json!({
        "path": path.display().to_string(),
        "size": metadata.len(),
        "isDirectory": metadata.is_dir(),
        "isFile": metadata.is_file(),
        "created": system_time_iso(metadata.created().ok()),
        "modified": system_time_iso(metadata.modified().ok()),
        "accessed": system_time_iso(metadata.accessed().ok()),
        "readonly": metadata.permissions().readonly(),
    });

    let event = if metadata.is_dir() {
        FsEvent::directory(path, "get_file_info")
    } else {
        FsEvent::file(path, "get_file_info").with_size(metadata.len())
    };
    ops.notifier.record(&event);
    Ok(info)
}

fn system_time_iso(time: Option<SystemTime>) -> Value {
    match time {
        Some(t) => {
            let dt: DateTime<Utc> = t.into();
            Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::NullNotifier;
    use crate::sandbox::PathSandbox;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn fs_ops(root: &Path) -> FsOps {
        let sandbox = PathSandbox::new(
            vec![root.to_path_buf()],
            root.join(".allowed-directories.json"),
        )
        .unwrap();
        FsOps::new(Arc::new(sandbox), Arc::new(NullNotifier))
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let ops = fs_ops(dir.path());
        let file = dir.path().join("nested/x.txt");

        ops.write(&file, "hello").unwrap();
        assert_eq!(ops.read(&file).unwrap(), "hello");
    }

    #[test]
    fn test_read_outside_sandbox_denied() {
        let dir = TempDir::new().unwrap();
        let ops = fs_ops(dir.path());

        let err = ops.read(Path::new("/etc/hostname")).unwrap_err();
        assert!(matches!(err, ToolError::AccessDenied(_)));
    }

    #[test]
    fn test_read_many_partial_failure() {
        let dir = TempDir::new().unwrap();
        let ops = fs_ops(dir.path());
        let good = dir.path().join("good.txt");
        ops.write(&good, "ok").unwrap();

        let results = ops.read_many(&[
            good.display().to_string(),
            dir.path().join("missing.txt").display().to_string(),
        ]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].result.as_deref(), Ok("ok"));
        assert!(results[1].result.is_err());
    }

    #[test]
    fn test_edit_dry_run_leaves_disk_unchanged() {
        let dir = TempDir::new().unwrap();
        let ops = fs_ops(dir.path());
        let file = dir.path().join("x.txt");
        ops.write(&file, "foo bar").unwrap();

        let report = ops
            .edit(
                &file,
                vec![EditOp {
                    old_text: "foo".to_string(),
                    new_text: "barbaz".to_string(),
                }],
                true,
            )
            .unwrap();

        assert_eq!(report.bytes_before, 7);
        assert_eq!(report.bytes_after, 10);
        assert_eq!(ops.read(&file).unwrap(), "foo bar");
    }

    #[test]
    fn test_edit_sees_progressively_modified_content() {
        let dir = TempDir::new().unwrap();
        let ops = fs_ops(dir.path());
        let file = dir.path().join("x.txt");
        ops.write(&file, "aaa").unwrap();

        // Second edit matches text introduced by the first
        let report = ops
            .edit(
                &file,
                vec![
                    EditOp {
                        old_text: "aaa".to_string(),
                        new_text: "bbb".to_string(),
                    },
                    EditOp {
                        old_text: "bbb".to_string(),
                        new_text: "ccc".to_string(),
                    },
                ],
                false,
            )
            .unwrap();
        assert_eq!(report.edits_applied, 2);
        assert_eq!(ops.read(&file).unwrap(), "ccc");
    }

    #[test]
    fn test_edit_missing_text_fails() {
        let dir = TempDir::new().unwrap();
        let ops = fs_ops(dir.path());
        let file = dir.path().join("x.txt");
        ops.write(&file, "content").unwrap();

        let err = ops
            .edit(
                &file,
                vec![EditOp {
                    old_text: "absent".to_string(),
                    new_text: "x".to_string(),
                }],
                false,
            )
            .unwrap_err();
        assert!(matches!(err, ToolError::TextNotFound { .. }));
    }

    #[test]
    fn test_search_reports_true_total_when_truncated() {
        let dir = TempDir::new().unwrap();
        let ops = fs_ops(dir.path());
        for i in 0..5 {
            ops.write(&dir.path().join(format!("f{i}.log")), "x").unwrap();
        }

        let report = ops.search(dir.path(), "*.log", 2).unwrap();
        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.total_matches, 5);
        assert!(report.truncated());
    }

    #[test]
    fn test_move_creates_destination_parent() {
        let dir = TempDir::new().unwrap();
        let ops = fs_ops(dir.path());
        let src = dir.path().join("a.txt");
        let dst = dir.path().join("deep/nested/b.txt");
        ops.write(&src, "move me").unwrap();

        ops.move_path(&src, &dst).unwrap();
        assert!(!src.exists());
        assert_eq!(ops.read(&dst).unwrap(), "move me");
    }

    #[test]
    fn test_tree_depth_bound_and_files() {
        let dir = TempDir::new().unwrap();
        let ops = fs_ops(dir.path());
        ops.write(&dir.path().join("sub/inner/deep.txt"), "x").unwrap();
        ops.write(&dir.path().join("top.txt"), "x").unwrap();

        let tree = ops.tree(dir.path(), 1).unwrap();
        let children = tree["children"].as_array().unwrap();
        assert_eq!(children.len(), 2);
        // Depth exhausted below "sub"
        let sub = children
            .iter()
            .find(|c| c["name"] == "sub")
            .expect("sub dir present");
        assert_eq!(sub["children"], "...");
    }
}
