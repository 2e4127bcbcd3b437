//! Query operations for the graph store

use std::collections::HashSet;

use crate::types::KnowledgeGraph;

use super::GraphStore;

/// Full graph snapshot, no filtering
pub fn read_graph(store: &GraphStore) -> KnowledgeGraph {
    store.snapshot()
}

/// Return the subset of entities whose name is in `names`.
///
/// Names with no match are silently omitted, not an error.
pub fn open_nodes(store: &GraphStore, names: Vec<String>) -> KnowledgeGraph {
    let name_set: HashSet<String> = names.into_iter().collect();
    let graph = store.graph.lock();

    KnowledgeGraph {
        entities: graph
            .entities
            .iter()
            .filter(|e| name_set.contains(&e.name))
            .cloned()
            .collect(),
    }
}
