//! Relation types for the knowledge graph

use serde::{Deserialize, Serialize};

/// Directed, typed edge between two entities
///
/// Stored on the source entity only. A given (from, to, relationType)
/// triple is never duplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relation {
    pub from: String,
    pub to: String,
    #[serde(rename = "relationType")]
    pub relation_type: String,
}

impl Relation {
    /// Create a new relation
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relation_type: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation_type: relation_type.into(),
        }
    }
}
