//! Per-item outcome reports for batch mutations

use serde::Serialize;

/// Outcome of one entry in a create_entities batch
#[derive(Debug, Clone, Serialize)]
pub struct EntityChange {
    pub name: String,
    /// "created" for a new node, "updated" when observations were
    /// merged into an existing one
    pub status: &'static str,
}

/// Outcome of one entry in a create_relations batch
#[derive(Debug, Clone, Serialize)]
pub struct RelationChange {
    pub from: String,
    pub to: String,
    #[serde(rename = "relationType")]
    pub relation_type: String,
    /// "created" / "already exists" on create, "deleted" /
    /// "not found" on delete
    pub status: &'static str,
}
