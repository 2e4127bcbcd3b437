//! Error taxonomy shared by every tool
//!
//! Tool failures cross the protocol boundary as `isError` tool
//! results, so these messages are what callers actually see.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate
pub type ToolResult<T> = Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    /// Path is outside every allowed directory
    #[error("access denied: {} is outside the allowed directories", .0.display())]
    AccessDenied(PathBuf),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// edit_file could not locate the text to replace
    #[error("text not found in {path}: {text:?}")]
    TextNotFound { path: String, text: String },

    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Removing this directory would leave the sandbox empty
    #[error("cannot remove the last allowed directory: {0}")]
    LastDirectory(String),

    /// A state file could not be written; in-memory state was rolled
    /// back
    #[error("failed to persist {what}")]
    Persistence {
        what: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),
}
