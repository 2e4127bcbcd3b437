//! CRUD operations for the graph store
//!
//! Every operation holds the graph lock for its full duration and
//! ends in a full graph save before returning.

use std::collections::HashSet;

use crate::error::{ToolError, ToolResult};
use crate::types::{
    Entity, EntityChange, Observation, ObservationDeletion, Relation, RelationChange,
};

use super::GraphStore;

/// Create entities, merging observations into any that already exist.
///
/// New entities are inserted with their (deduplicated) observations
/// and an empty relation list; for an existing name the incoming
/// observations are unioned into the current ordered set.
pub fn create_entities(
    store: &GraphStore,
    entities: Vec<Entity>,
) -> ToolResult<Vec<EntityChange>> {
    let mut graph = store.graph.lock();
    let mut changes = Vec::with_capacity(entities.len());

    for incoming in entities {
        match graph.get_mut(&incoming.name) {
            Some(existing) => {
                existing.add_observations(incoming.observations);
                changes.push(EntityChange {
                    name: incoming.name,
                    status: "updated",
                });
            }
            None => {
                let mut entity = Entity::new(incoming.name.clone(), incoming.entity_type);
                entity.add_observations(incoming.observations);
                graph.entities.push(entity);
                changes.push(EntityChange {
                    name: incoming.name,
                    status: "created",
                });
            }
        }
    }

    store.persist(&graph)?;
    Ok(changes)
}

/// Create relations, stub-creating missing endpoints.
///
/// Either endpoint that does not yet exist is created as a stub entity
/// of type "unknown". An exact (from, to, relationType) triple that is
/// already present on the source entity is skipped and reported, not
/// errored.
pub fn create_relations(
    store: &GraphStore,
    relations: Vec<Relation>,
) -> ToolResult<Vec<RelationChange>> {
    let mut graph = store.graph.lock();
    let mut changes = Vec::with_capacity(relations.len());

    for relation in relations {
        for endpoint in [&relation.from, &relation.to] {
            if !graph.contains(endpoint) {
                graph.entities.push(Entity::stub(endpoint.clone()));
            }
        }

        // Endpoints exist now, unwrap cannot be observed by callers
        let source = graph
            .get_mut(&relation.from)
            .expect("stub-created source entity");
        let status = if source.has_relation(&relation.to, &relation.relation_type) {
            "already exists"
        } else {
            source.relations.push(relation.clone());
            "created"
        };
        changes.push(RelationChange {
            from: relation.from,
            to: relation.to,
            relation_type: relation.relation_type,
            status,
        });
    }

    store.persist(&graph)?;
    Ok(changes)
}

/// Add observations to existing entities.
///
/// Fails with EntityNotFound before touching the graph if any named
/// entity is absent. Returns the observations actually added after
/// deduplication.
pub fn add_observations(
    store: &GraphStore,
    observations: Vec<Observation>,
) -> ToolResult<Vec<Observation>> {
    let mut graph = store.graph.lock();

    for obs in &observations {
        if !graph.contains(&obs.entity_name) {
            return Err(ToolError::EntityNotFound(obs.entity_name.clone()));
        }
    }

    let mut added = Vec::new();
    for obs in observations {
        let entity = graph
            .get_mut(&obs.entity_name)
            .expect("existence checked above");
        let mut new_contents = Vec::new();
        for content in obs.contents {
            if !entity.observations.contains(&content) {
                entity.observations.push(content.clone());
                new_contents.push(content);
            }
        }
        added.push(Observation {
            entity_name: obs.entity_name,
            contents: new_contents,
        });
    }

    store.persist(&graph)?;
    Ok(added)
}

/// Delete entities and every relation pointing at them.
///
/// Dangling-edge cleanup is mandatory: after this returns, no relation
/// anywhere in the graph has `to` equal to a removed name. Returns the
/// number of entities removed.
pub fn delete_entities(store: &GraphStore, entity_names: Vec<String>) -> ToolResult<usize> {
    let mut graph = store.graph.lock();
    let to_delete: HashSet<String> = entity_names.into_iter().collect();

    let before = graph.entities.len();
    graph.entities.retain(|e| !to_delete.contains(&e.name));
    let removed = before - graph.entities.len();

    for entity in graph.entities.iter_mut() {
        entity.relations.retain(|r| !to_delete.contains(&r.to));
    }

    store.persist(&graph)?;
    Ok(removed)
}

/// Delete exact-string observations from existing entities.
///
/// Fails with EntityNotFound before touching the graph if any named
/// entity is absent. Returns the number of observations removed.
pub fn delete_observations(
    store: &GraphStore,
    deletions: Vec<ObservationDeletion>,
) -> ToolResult<usize> {
    let mut graph = store.graph.lock();

    for deletion in &deletions {
        if !graph.contains(&deletion.entity_name) {
            return Err(ToolError::EntityNotFound(deletion.entity_name.clone()));
        }
    }

    let mut removed = 0;
    for deletion in deletions {
        let entity = graph
            .get_mut(&deletion.entity_name)
            .expect("existence checked above");
        let to_remove: HashSet<String> = deletion.observations.into_iter().collect();
        let before = entity.observations.len();
        entity.observations.retain(|o| !to_remove.contains(o));
        removed += before - entity.observations.len();
    }

    store.persist(&graph)?;
    Ok(removed)
}

/// Delete matching relation triples from their source entities.
///
/// Triples with no match are reported with status "not found", not
/// errored.
pub fn delete_relations(
    store: &GraphStore,
    relations: Vec<Relation>,
) -> ToolResult<Vec<RelationChange>> {
    let mut graph = store.graph.lock();
    let mut changes = Vec::with_capacity(relations.len());

    for relation in relations {
        let mut deleted = false;
        if let Some(source) = graph.get_mut(&relation.from) {
            let before = source.relations.len();
            source
                .relations
                .retain(|r| !(r.to == relation.to && r.relation_type == relation.relation_type));
            deleted = source.relations.len() < before;
        }
        changes.push(RelationChange {
            from: relation.from,
            to: relation.to,
            relation_type: relation.relation_type,
            status: if deleted { "deleted" } else { "not found" },
        });
    }

    store.persist(&graph)?;
    Ok(changes)
}
