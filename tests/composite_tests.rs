//! Integration tests for the composite server: filesystem tools wired
//! to a graph-backed notifier, plus the bridge query tools.

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use memory_fs::bridge::GraphNotifier;
use memory_fs::fs::FsOps;
use memory_fs::graph::GraphStore;
use memory_fs::protocol::Tool;
use memory_fs::sandbox::PathSandbox;
use memory_fs::tools::{
    AddAllowedDirectoryTool, FindSimilarFilesTool, GetFilesystemMemoryStatsTool, ReadFileTool,
    RecallFileHistoryTool, RemoveAllowedDirectoryTool, WriteFileTool,
};

fn setup() -> (Arc<GraphStore>, Arc<FsOps>, TempDir, TempDir) {
    let root = TempDir::new().unwrap();
    let state = TempDir::new().unwrap();

    let store = Arc::new(GraphStore::open(state.path().join("memory.json")));
    let sandbox = PathSandbox::new(
        vec![root.path().to_path_buf()],
        state.path().join("allowed.json"),
    )
    .unwrap();
    let ops = Arc::new(FsOps::new(
        Arc::new(sandbox),
        Arc::new(GraphNotifier::new(store.clone())),
    ));
    (store, ops, root, state)
}

fn text_of(result: &serde_json::Value) -> &str {
    result["content"][0]["text"].as_str().unwrap()
}

#[test]
fn test_write_and_read_record_shadow_entities() {
    let (store, ops, root, _state) = setup();
    let file = root.path().join("a.txt");
    let path = file.display().to_string();

    let write = WriteFileTool::new(ops.clone());
    write
        .execute(json!({ "path": path, "content": "hello world" }))
        .unwrap();

    let read = ReadFileTool::new(ops);
    let result = read.execute(json!({ "path": path })).unwrap();
    assert_eq!(text_of(&result), "hello world");

    let graph = store.read_graph();
    let entity = graph.get(&format!("file:{path}")).expect("shadow entity");
    assert!(entity.observations.iter().any(|o| o == "Operation: write_file"));
    assert!(entity.observations.iter().any(|o| o == "Operation: read_file"));
    assert!(entity
        .observations
        .iter()
        .any(|o| o == "Preview: hello world"));

    let parent = format!("directory:{}", root.path().display());
    let dir = graph.get(&parent).expect("parent directory entity");
    assert!(dir
        .relations
        .iter()
        .any(|r| r.to == format!("file:{path}") && r.relation_type == "contains"));
}

#[test]
fn test_denied_access_leaves_no_trace() {
    let (store, ops, _root, _state) = setup();

    let read = ReadFileTool::new(ops);
    let err = read.execute(json!({ "path": "/tmp/b" }));
    assert!(err.is_err());

    assert_eq!(store.read_graph().entity_count(), 0);
}

#[test]
fn test_sequential_reads_create_accessed_after_edge() {
    let (store, ops, root, _state) = setup();
    let first = root.path().join("first.txt");
    let second = root.path().join("second.txt");
    ops.write(&first, "1").unwrap();
    ops.write(&second, "2").unwrap();

    ops.read(&first).unwrap();
    ops.read(&second).unwrap();

    let graph = store.read_graph();
    let entity = graph
        .get(&format!("file:{}", second.display()))
        .expect("second file entity");
    assert!(entity.relations.iter().any(|r| {
        r.to == format!("file:{}", first.display()) && r.relation_type == "accessed_after"
    }));
}

#[test]
fn test_add_allowed_directory_is_idempotent_and_recorded() {
    let (store, ops, _root, _state) = setup();
    let extra = TempDir::new().unwrap();
    let path = extra.path().display().to_string();

    let add = AddAllowedDirectoryTool::new(ops.clone());
    let result = add.execute(json!({ "path": path })).unwrap();
    assert!(text_of(&result).starts_with("Added"));

    let result = add.execute(json!({ "path": path })).unwrap();
    assert!(text_of(&result).contains("already in the allowed list"));
    assert_eq!(ops.sandbox().count(), 2);

    // One recorded add, no duplicate from the no-op
    let graph = store.read_graph();
    let dir = graph
        .entities
        .iter()
        .find(|e| e.observations.iter().any(|o| o == "Operation: add_allowed_directory"))
        .expect("recorded directory entity");
    assert_eq!(
        dir.observations
            .iter()
            .filter(|o| *o == "Operation: add_allowed_directory")
            .count(),
        1
    );
}

#[test]
fn test_remove_allowed_directory_keeps_history() {
    let (store, ops, _root, _state) = setup();
    let extra = TempDir::new().unwrap();
    let path = extra.path().display().to_string();

    let add = AddAllowedDirectoryTool::new(ops.clone());
    add.execute(json!({ "path": path })).unwrap();

    let remove = RemoveAllowedDirectoryTool::new(ops.clone());
    let result = remove.execute(json!({ "path": path })).unwrap();
    assert!(text_of(&result).starts_with("Removed"));
    assert_eq!(ops.sandbox().count(), 1);

    // The directory entity survives with the removal recorded
    let graph = store.read_graph();
    let dir = graph
        .entities
        .iter()
        .find(|e| e.observations.iter().any(|o| o == "Operation: remove_allowed_directory"))
        .expect("directory entity kept");
    assert!(dir
        .observations
        .iter()
        .any(|o| o == "Operation: add_allowed_directory"));
}

#[test]
fn test_bridge_query_tools() {
    let (store, ops, root, _state) = setup();
    let file = root.path().join("report.txt");
    ops.write(&file, "quarterly report").unwrap();

    let recall = RecallFileHistoryTool::new(store.clone());
    let result = recall
        .execute(json!({ "filePath": file.display().to_string() }))
        .unwrap();
    assert!(text_of(&result).contains("write_file"));

    let err = recall.execute(json!({ "filePath": "/never/seen" }));
    assert!(err.is_err());

    let similar = FindSimilarFilesTool::new(store.clone());
    let result = similar.execute(json!({ "query": "report" })).unwrap();
    assert!(text_of(&result).contains("report.txt"));

    let stats = GetFilesystemMemoryStatsTool::new(store);
    let result = stats.execute(json!({})).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
    assert_eq!(parsed["trackedFiles"], 1);
    assert_eq!(parsed["filesAccessedLast24h"], 1);
}
