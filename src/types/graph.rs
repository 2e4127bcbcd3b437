//! Knowledge graph container type
//!
//! On disk the graph is a JSON object keyed by entity name:
//! `{ "entities": { "<name>": { "name", "entityType", ... } } }`.
//! In memory entities live in a Vec so insertion order survives a
//! save/load cycle (search tie-breaking relies on it).

use serde::{Deserialize, Serialize};

use super::{Entity, Relation};

/// Knowledge graph: a mapping from entity name to entity
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct KnowledgeGraph {
    #[serde(with = "entity_map", default)]
    pub entities: Vec<Entity>,
}

impl KnowledgeGraph {
    /// Create an empty knowledge graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entity by name
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Look up an entity by name, mutably
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.name == name)
    }

    /// Whether an entity with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Get the total number of relations across all entities
    pub fn relation_count(&self) -> usize {
        self.entities.iter().map(|e| e.relations.len()).sum()
    }

    /// All relations in the graph, flattened
    pub fn all_relations(&self) -> impl Iterator<Item = &Relation> {
        self.entities.iter().flat_map(|e| e.relations.iter())
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Serialize the entity Vec as a name-keyed JSON object and back,
/// keeping document order on load.
mod entity_map {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use crate::types::Entity;

    pub fn serialize<S>(entities: &[Entity], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(entities.len()))?;
        for entity in entities {
            map.serialize_entry(&entity.name, entity)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Entity>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntityMapVisitor;

        impl<'de> Visitor<'de> for EntityMapVisitor {
            type Value = Vec<Entity>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of entity name to entity")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entities = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, mut entity)) = access.next_entry::<String, Entity>()? {
                    // The key is authoritative when the value omits it
                    if entity.name.is_empty() {
                        entity.name = name;
                    }
                    entities.push(entity);
                }
                Ok(entities)
            }
        }

        deserializer.deserialize_map(EntityMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Relation;

    #[test]
    fn test_round_trip_preserves_order_and_structure() {
        let mut graph = KnowledgeGraph::new();
        let mut zed = Entity::new("zed", "person");
        zed.observations = vec!["first".to_string(), "second".to_string()];
        zed.relations.push(Relation::new("zed", "alice", "knows"));
        graph.entities.push(zed);
        graph.entities.push(Entity::new("alice", "person"));

        let json = serde_json::to_string(&graph).unwrap();
        let reloaded: KnowledgeGraph = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded, graph);
        // "zed" sorts after "alice" but was inserted first
        assert_eq!(reloaded.entities[0].name, "zed");
    }

    #[test]
    fn test_file_format_is_name_keyed() {
        let mut graph = KnowledgeGraph::new();
        graph.entities.push(Entity::new("alice", "person"));

        let value = serde_json::to_value(&graph).unwrap();
        assert!(value["entities"]["alice"]["entityType"] == "person");
    }
}
