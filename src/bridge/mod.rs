//! Filesystem-to-graph bridge
//!
//! Translates successful filesystem operations into shadow entities,
//! `contains` relations, and `accessed_after` temporal edges in the
//! knowledge graph. Shadow entities are a log of observed activity,
//! not a mirror of the filesystem's live state.
//!
//! The [`Notifier`] trait carries a no-throw contract: a memory-
//! subsystem fault must never fail the filesystem operation that
//! triggered it, so implementations log and swallow their own errors.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};

use crate::error::{ToolError, ToolResult};
use crate::graph::search::{recently_accessed_files, search_graph, ACCESSED_AT_PREFIX};
use crate::graph::GraphStore;
use crate::types::{
    directory_entity_name, file_entity_name, Entity, Relation, DIRECTORY_ENTITY_TYPE,
    FILE_ENTITY_TYPE,
};
use crate::utils::iso_now;

/// Content previews are capped at this many characters
const PREVIEW_MAX_CHARS: usize = 200;

/// A successful filesystem operation, as seen by the bridge
#[derive(Debug, Clone)]
pub struct FsEvent {
    pub path: PathBuf,
    /// Tool-level operation name ("write_file", "read_file", ...)
    pub operation: &'static str,
    pub is_directory: bool,
    pub size: Option<u64>,
    /// Raw content; the bridge truncates it to a preview
    pub content: Option<String>,
}

impl FsEvent {
    pub fn file(path: PathBuf, operation: &'static str) -> Self {
        Self {
            path,
            operation,
            is_directory: false,
            size: None,
            content: None,
        }
    }

    pub fn directory(path: PathBuf, operation: &'static str) -> Self {
        Self {
            path,
            operation,
            is_directory: true,
            size: None,
            content: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Best-effort observer of filesystem activity.
///
/// Implementations must not fail or panic; recording is telemetry,
/// never part of the primary effect.
pub trait Notifier: Send + Sync {
    fn record(&self, event: &FsEvent);
}

/// Notifier for memory-disabled servers; records nothing
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn record(&self, _event: &FsEvent) {}
}

/// Notifier that feeds filesystem activity into a graph store
pub struct GraphNotifier {
    store: Arc<GraphStore>,
}

impl GraphNotifier {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }

    fn record_inner(&self, event: &FsEvent) -> ToolResult<()> {
        let entity_name = if event.is_directory {
            directory_entity_name(&event.path)
        } else {
            file_entity_name(&event.path)
        };
        let entity_type = if event.is_directory {
            DIRECTORY_ENTITY_TYPE
        } else {
            FILE_ENTITY_TYPE
        };

        let mut observations = vec![
            format!("Operation: {}", event.operation),
            format!("{ACCESSED_AT_PREFIX}{}", iso_now()),
        ];
        if let Some(name) = event.path.file_name() {
            observations.push(format!("Name: {}", name.to_string_lossy()));
        }
        if let Some(parent) = event.path.parent() {
            observations.push(format!("Parent: {}", parent.display()));
        }
        if let Some(size) = event.size {
            observations.push(format!("Size: {size} bytes"));
        }
        if let Some(content) = &event.content {
            observations.push(format!("Preview: {}", preview(content)));
        }

        let mut entity = Entity::new(entity_name.clone(), entity_type);
        entity.observations = observations;
        self.store.create_entities(vec![entity])?;

        // Parent directory stub and containment edge
        if let Some(parent) = event.path.parent() {
            let parent_name = directory_entity_name(parent);
            self.store.create_entities(vec![Entity::new(
                parent_name.clone(),
                DIRECTORY_ENTITY_TYPE,
            )])?;
            self.store.create_relations(vec![Relation::new(
                parent_name,
                entity_name.clone(),
                "contains",
            )])?;
        }

        if !event.is_directory {
            self.link_temporal(&entity_name)?;
        }

        Ok(())
    }

    /// Add an `accessed_after` edge from the just-touched file to the
    /// second-most-recently-touched one, when at least two files were
    /// accessed within the last 24 hours.
    fn link_temporal(&self, entity_name: &str) -> ToolResult<()> {
        let graph = self.store.snapshot();
        let recent = recently_accessed_files(&graph, Utc::now());
        if recent.len() < 2 {
            return Ok(());
        }

        if let Some((previous, _)) = recent.iter().find(|(name, _)| name != entity_name) {
            self.store.create_relations(vec![Relation::new(
                entity_name,
                previous.clone(),
                "accessed_after",
            )])?;
        }
        Ok(())
    }
}

impl Notifier for GraphNotifier {
    fn record(&self, event: &FsEvent) {
        if let Err(e) = self.record_inner(event) {
            tracing::warn!(
                path = %event.path.display(),
                operation = event.operation,
                error = %e,
                "memory bridge update failed, filesystem result unaffected"
            );
        }
    }
}

/// Truncate content to a preview of at most 200 characters, with a
/// trailing ellipsis marker when truncated.
fn preview(content: &str) -> String {
    if content.chars().count() <= PREVIEW_MAX_CHARS {
        content.to_string()
    } else {
        let truncated: String = content.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{truncated}...")
    }
}

/// Shadow-entity history for one file path
pub fn recall_file_history(store: &GraphStore, file_path: &str) -> ToolResult<Entity> {
    let name = file_entity_name(std::path::Path::new(file_path));
    store
        .snapshot()
        .get(&name)
        .cloned()
        .ok_or(ToolError::EntityNotFound(name))
}

/// Rank file shadow entities against a query
pub fn find_similar_files(store: &GraphStore, query: &str, limit: usize) -> Vec<Entity> {
    let graph = store.snapshot();
    let mut results = search_graph(&graph, query, Some(FILE_ENTITY_TYPE));
    results.truncate(limit);
    results
}

/// Counts of tracked filesystem activity in the graph
pub fn memory_stats(store: &GraphStore) -> Value {
    let graph = store.snapshot();
    let files = graph
        .entities
        .iter()
        .filter(|e| e.entity_type == FILE_ENTITY_TYPE)
        .count();
    let directories = graph
        .entities
        .iter()
        .filter(|e| e.entity_type == DIRECTORY_ENTITY_TYPE)
        .count();
    let recent = recently_accessed_files(&graph, Utc::now()).len();

    json!({
        "trackedFiles": files,
        "trackedDirectories": directories,
        "totalEntities": graph.entity_count(),
        "totalRelations": graph.relation_count(),
        "filesAccessedLast24h": recent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (Arc<GraphStore>, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(GraphStore::open(dir.path().join("memory.json")));
        (store, dir)
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let long = "x".repeat(500);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_MAX_CHARS + 3);
        assert!(p.ends_with("..."));

        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_record_creates_shadow_entity_and_containment() {
        let (store, _dir) = store();
        let notifier = GraphNotifier::new(store.clone());

        notifier.record(
            &FsEvent::file(PathBuf::from("/tmp/a/x.txt"), "write_file")
                .with_size(5)
                .with_content("hello"),
        );

        let graph = store.snapshot();
        let file = graph.get("file:/tmp/a/x.txt").expect("file entity");
        assert_eq!(file.entity_type, FILE_ENTITY_TYPE);
        assert!(file
            .observations
            .iter()
            .any(|o| o.starts_with(ACCESSED_AT_PREFIX)));
        assert!(file.observations.iter().any(|o| o == "Preview: hello"));

        let dir = graph.get("directory:/tmp/a").expect("directory entity");
        assert!(dir
            .relations
            .iter()
            .any(|r| r.to == "file:/tmp/a/x.txt" && r.relation_type == "contains"));
    }

    #[test]
    fn test_two_accesses_link_accessed_after() {
        let (store, _dir) = store();
        let notifier = GraphNotifier::new(store.clone());

        notifier.record(&FsEvent::file(PathBuf::from("/tmp/a/first.txt"), "read_file"));
        notifier.record(&FsEvent::file(PathBuf::from("/tmp/a/second.txt"), "read_file"));

        let graph = store.snapshot();
        let second = graph.get("file:/tmp/a/second.txt").unwrap();
        assert!(second
            .relations
            .iter()
            .any(|r| r.to == "file:/tmp/a/first.txt" && r.relation_type == "accessed_after"));
    }

    #[test]
    fn test_recall_and_stats() {
        let (store, _dir) = store();
        let notifier = GraphNotifier::new(store.clone());
        notifier.record(&FsEvent::file(PathBuf::from("/tmp/a/x.txt"), "read_file"));

        let entity = recall_file_history(&store, "/tmp/a/x.txt").unwrap();
        assert_eq!(entity.entity_type, FILE_ENTITY_TYPE);

        let stats = memory_stats(&store);
        assert_eq!(stats["trackedFiles"], 1);
        assert_eq!(stats["trackedDirectories"], 1);
        assert_eq!(stats["filesAccessedLast24h"], 1);

        assert!(recall_file_history(&store, "/nope").is_err());
    }
}
