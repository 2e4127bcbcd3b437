//! Entity types for the knowledge graph

use serde::{Deserialize, Serialize};

use super::Relation;

/// Entity in the knowledge graph
///
/// Observations are semantically a set (duplicates suppressed on
/// insert) but insertion order is preserved. Outgoing relations are
/// stored here on the source entity only, never mirrored on the
/// target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "entityType")]
    pub entity_type: String,
    #[serde(default)]
    pub observations: Vec<String>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Entity {
    /// Create a new entity with no observations or relations
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            observations: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Create a stub entity of type `unknown` for an unreferenced
    /// relation endpoint
    pub fn stub(name: impl Into<String>) -> Self {
        Self::new(name, "unknown")
    }

    /// Append observations, dropping exact-string duplicates while
    /// preserving the existing order. Returns the number actually
    /// added.
    pub fn add_observations<I, S>(&mut self, contents: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for content in contents {
            let content = content.into();
            if !self.observations.contains(&content) {
                self.observations.push(content);
                added += 1;
            }
        }
        added
    }

    /// Whether this entity already carries the exact relation triple
    pub fn has_relation(&self, to: &str, relation_type: &str) -> bool {
        self.relations
            .iter()
            .any(|r| r.to == to && r.relation_type == relation_type)
    }
}
