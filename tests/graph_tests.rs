//! Integration tests for the knowledge graph store

use std::fs;

use tempfile::TempDir;

use memory_fs::error::ToolError;
use memory_fs::graph::GraphStore;
use memory_fs::types::{Entity, Observation, ObservationDeletion, Relation};

fn setup_store() -> (GraphStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = GraphStore::open(dir.path().join("memory.json"));
    (store, dir)
}

fn entity(name: &str, entity_type: &str, observations: &[&str]) -> Entity {
    let mut e = Entity::new(name, entity_type);
    e.observations = observations.iter().map(|s| s.to_string()).collect();
    e
}

#[test]
fn test_create_entities() {
    let (store, _dir) = setup_store();

    let changes = store
        .create_entities(vec![
            entity("Alice", "Person", &["Lives in NYC"]),
            entity("Bob", "Person", &[]),
        ])
        .unwrap();

    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].status, "created");
    assert_eq!(changes[1].status, "created");
    assert_eq!(store.read_graph().entity_count(), 2);
}

#[test]
fn test_create_existing_entity_merges_observations() {
    let (store, _dir) = setup_store();

    store
        .create_entities(vec![entity("Alice", "Person", &["a", "b"])])
        .unwrap();
    let changes = store
        .create_entities(vec![entity("Alice", "Person", &["a", "b", "c"])])
        .unwrap();

    assert_eq!(changes[0].status, "updated");
    let graph = store.read_graph();
    assert_eq!(graph.entity_count(), 1);
    // Duplicates suppressed, the one new observation appended at the end
    assert_eq!(graph.get("Alice").unwrap().observations, vec!["a", "b", "c"]);
}

#[test]
fn test_create_relations_stubs_missing_endpoints() {
    let (store, _dir) = setup_store();

    let changes = store
        .create_relations(vec![Relation::new("Alice", "Bob", "knows")])
        .unwrap();

    assert_eq!(changes[0].status, "created");
    let graph = store.read_graph();
    assert_eq!(graph.get("Alice").unwrap().entity_type, "unknown");
    assert_eq!(graph.get("Bob").unwrap().entity_type, "unknown");

    // Exact duplicate triple is reported, not errored
    let changes = store
        .create_relations(vec![Relation::new("Alice", "Bob", "knows")])
        .unwrap();
    assert_eq!(changes[0].status, "already exists");
    assert_eq!(store.read_graph().get("Alice").unwrap().relations.len(), 1);
}

#[test]
fn test_add_observations_requires_entity() {
    let (store, _dir) = setup_store();

    store
        .create_entities(vec![entity("Alice", "Person", &["a"])])
        .unwrap();

    let err = store
        .add_observations(vec![
            Observation {
                entity_name: "Alice".to_string(),
                contents: vec!["b".to_string()],
            },
            Observation {
                entity_name: "Ghost".to_string(),
                contents: vec!["x".to_string()],
            },
        ])
        .unwrap_err();
    assert!(matches!(err, ToolError::EntityNotFound(name) if name == "Ghost"));

    // Validate-first: the failed batch changed nothing
    assert_eq!(store.read_graph().get("Alice").unwrap().observations, vec!["a"]);

    let added = store
        .add_observations(vec![Observation {
            entity_name: "Alice".to_string(),
            contents: vec!["a".to_string(), "b".to_string()],
        }])
        .unwrap();
    assert_eq!(added[0].contents, vec!["b"]);
}

#[test]
fn test_delete_entities_strips_inbound_relations() {
    let (store, _dir) = setup_store();

    store
        .create_entities(vec![
            entity("Alice", "Person", &[]),
            entity("Bob", "Person", &[]),
            entity("Carol", "Person", &[]),
        ])
        .unwrap();
    store
        .create_relations(vec![
            Relation::new("Alice", "Bob", "knows"),
            Relation::new("Carol", "Bob", "knows"),
            Relation::new("Alice", "Carol", "knows"),
        ])
        .unwrap();

    let removed = store.delete_entities(vec!["Bob".to_string()]).unwrap();
    assert_eq!(removed, 1);

    let graph = store.read_graph();
    assert!(graph.get("Bob").is_none());
    for entity in &graph.entities {
        assert!(entity.relations.iter().all(|r| r.to != "Bob"));
    }
    // Unrelated edges survive
    assert!(graph.get("Alice").unwrap().has_relation("Carol", "knows"));
}

#[test]
fn test_delete_observations_and_relations() {
    let (store, _dir) = setup_store();

    store
        .create_entities(vec![entity("Alice", "Person", &["a", "b"])])
        .unwrap();
    store
        .create_relations(vec![Relation::new("Alice", "Bob", "knows")])
        .unwrap();

    let removed = store
        .delete_observations(vec![ObservationDeletion {
            entity_name: "Alice".to_string(),
            observations: vec!["a".to_string(), "missing".to_string()],
        }])
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(store.read_graph().get("Alice").unwrap().observations, vec!["b"]);

    let changes = store
        .delete_relations(vec![
            Relation::new("Alice", "Bob", "knows"),
            Relation::new("Alice", "Bob", "hates"),
        ])
        .unwrap();
    assert_eq!(changes[0].status, "deleted");
    assert_eq!(changes[1].status, "not found");
}

#[test]
fn test_search_ranks_name_above_observation() {
    let (store, _dir) = setup_store();

    store
        .create_entities(vec![
            entity("notes", "Document", &["groceries"]),
            entity("journal", "Document", &["mentions notes in passing"]),
            entity("unrelated", "Document", &["nothing here"]),
        ])
        .unwrap();

    let results = store.search_nodes("notes");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "notes");
    assert_eq!(results[1].name, "journal");
    // Zero-score entities are excluded entirely
    assert!(results.iter().all(|e| e.name != "unrelated"));
}

#[test]
fn test_open_nodes_omits_missing_names() {
    let (store, _dir) = setup_store();

    store
        .create_entities(vec![entity("Alice", "Person", &[])])
        .unwrap();

    let graph = store.open_nodes(vec!["Alice".to_string(), "Ghost".to_string()]);
    assert_eq!(graph.entity_count(), 1);
    assert!(graph.get("Alice").is_some());
}

#[test]
fn test_save_and_reload_preserves_graph() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memory.json");

    let store = GraphStore::open(&path);
    store
        .create_entities(vec![
            entity("Alice", "Person", &["Lives in NYC"]),
            entity("Bob", "Person", &[]),
        ])
        .unwrap();
    store
        .create_relations(vec![Relation::new("Alice", "Bob", "knows")])
        .unwrap();
    let before = store.read_graph();

    let reloaded = GraphStore::open(&path);
    let after = reloaded.read_graph();
    assert_eq!(before, after);
    // Insertion order survives the name-keyed serialization
    assert_eq!(after.entities[0].name, "Alice");
    assert_eq!(after.entities[1].name, "Bob");
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memory.json");
    fs::write(&path, "{ not json").unwrap();

    // open() recovers by starting empty; load() surfaces the error
    let store = GraphStore::open(&path);
    assert_eq!(store.read_graph().entity_count(), 0);
    assert!(GraphStore::load(&path).is_err());
}
