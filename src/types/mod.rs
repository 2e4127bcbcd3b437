//! Data types for the memory and filesystem tool servers

mod change;
mod entity;
mod graph;
mod observation;
mod relation;

pub use change::{EntityChange, RelationChange};
pub use entity::Entity;
pub use graph::KnowledgeGraph;
pub use observation::{Observation, ObservationDeletion};
pub use relation::Relation;

/// Entity type tag for file shadow entities
pub const FILE_ENTITY_TYPE: &str = "filesystem_file";

/// Entity type tag for directory shadow entities
pub const DIRECTORY_ENTITY_TYPE: &str = "filesystem_directory";

/// Name prefix for file shadow entities
pub fn file_entity_name(path: &std::path::Path) -> String {
    format!("file:{}", path.display())
}

/// Name prefix for directory shadow entities
pub fn directory_entity_name(path: &std::path::Path) -> String {
    format!("directory:{}", path.display())
}
