//! Knowledge graph store - core data engine
//!
//! The graph lives in memory behind a lock and is mirrored to a single
//! JSON file after every mutating operation, before the operation's
//! result is returned. There is no ambient singleton: callers open a
//! store with an explicit path and pass it around.

mod crud;
mod query;
pub mod search;

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{ToolError, ToolResult};
use crate::types::{
    Entity, EntityChange, KnowledgeGraph, Observation, ObservationDeletion, Relation,
    RelationChange,
};
use crate::utils::atomic_write;

/// Knowledge graph store with write-through JSON persistence
pub struct GraphStore {
    path: PathBuf,
    graph: Mutex<KnowledgeGraph>,
}

impl GraphStore {
    /// Open a store backed by the given file.
    ///
    /// A missing or unparsable file is treated as "no prior state":
    /// the store starts empty and the parse failure is logged, never
    /// fatal. Callers that need to distinguish corruption can use
    /// [`GraphStore::load`] directly.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let graph = match Self::load(&path) {
            Ok(graph) => graph,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load knowledge graph, starting empty"
                );
                KnowledgeGraph::default()
            }
        };

        Self {
            path,
            graph: Mutex::new(graph),
        }
    }

    /// Load a graph from a file without fallback.
    ///
    /// A missing file is an empty graph; a present-but-corrupt file is
    /// an error, and choosing "start empty" as recovery is the
    /// caller's decision.
    pub fn load(path: &Path) -> ToolResult<KnowledgeGraph> {
        if !path.exists() {
            return Ok(KnowledgeGraph::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the graph to disk (temp-file + rename)
    pub(crate) fn persist(&self, graph: &KnowledgeGraph) -> ToolResult<()> {
        let content = serde_json::to_string_pretty(graph)?;
        atomic_write(&self.path, &content).map_err(|source| ToolError::Persistence {
            what: format!("knowledge graph to {}", self.path.display()),
            source,
        })
    }

    /// Get a clone of the current graph
    pub fn snapshot(&self) -> KnowledgeGraph {
        self.graph.lock().clone()
    }

    /// Get the backing file path
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    // CRUD operations (from crud.rs)

    pub fn create_entities(&self, entities: Vec<Entity>) -> ToolResult<Vec<EntityChange>> {
        crud::create_entities(self, entities)
    }

    pub fn create_relations(&self, relations: Vec<Relation>) -> ToolResult<Vec<RelationChange>> {
        crud::create_relations(self, relations)
    }

    pub fn add_observations(&self, observations: Vec<Observation>) -> ToolResult<Vec<Observation>> {
        crud::add_observations(self, observations)
    }

    pub fn delete_entities(&self, entity_names: Vec<String>) -> ToolResult<usize> {
        crud::delete_entities(self, entity_names)
    }

    pub fn delete_observations(&self, deletions: Vec<ObservationDeletion>) -> ToolResult<usize> {
        crud::delete_observations(self, deletions)
    }

    pub fn delete_relations(&self, relations: Vec<Relation>) -> ToolResult<Vec<RelationChange>> {
        crud::delete_relations(self, relations)
    }

    // Query operations (from query.rs)

    pub fn read_graph(&self) -> KnowledgeGraph {
        query::read_graph(self)
    }

    pub fn open_nodes(&self, names: Vec<String>) -> KnowledgeGraph {
        query::open_nodes(self, names)
    }

    // Search operations (from search.rs)

    pub fn search_nodes(&self, query: &str) -> Vec<Entity> {
        search::search_nodes(self, query)
    }
}
