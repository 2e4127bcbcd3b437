//! Allowed-directory sidecar persistence
//!
//! The sidecar is a small JSON file:
//! `{ "allowedDirectories": [...], "lastUpdated": ISO-8601 }`.
//! On startup its directories are unioned into the constructor's list;
//! the sidecar never replaces explicit startup arguments, only extends
//! them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ToolError, ToolResult};
use crate::utils::{atomic_write, iso_now};

/// On-disk shape of the allowed-directory sidecar
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SandboxConfig {
    #[serde(rename = "allowedDirectories", default)]
    pub allowed_directories: Vec<String>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: String,
}

impl SandboxConfig {
    /// Load the sidecar, if present.
    ///
    /// A missing file is `Ok(None)`; a corrupt file is an error so the
    /// caller can choose to log and continue without it.
    pub fn load(path: &Path) -> ToolResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Persist the directory list with a fresh timestamp.
    ///
    /// A write failure here means the directory-list change is not
    /// durable and is surfaced as a fatal error on that call.
    pub fn save(path: &Path, directories: &[PathBuf]) -> ToolResult<()> {
        let config = SandboxConfig {
            allowed_directories: directories
                .iter()
                .map(|d| d.display().to_string())
                .collect(),
            last_updated: iso_now(),
        };
        let content = serde_json::to_string_pretty(&config)?;
        atomic_write(path, &content).map_err(|source| ToolError::Persistence {
            what: format!("allowed directories to {}", path.display()),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let sidecar = dir.path().join("allowed.json");

        SandboxConfig::save(&sidecar, &[PathBuf::from("/tmp/a"), PathBuf::from("/tmp/b")])
            .unwrap();

        let loaded = SandboxConfig::load(&sidecar).unwrap().unwrap();
        assert_eq!(loaded.allowed_directories, vec!["/tmp/a", "/tmp/b"]);
        assert!(!loaded.last_updated.is_empty());
    }

    #[test]
    fn test_missing_sidecar_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = SandboxConfig::load(&dir.path().join("nope.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupt_sidecar_is_error() {
        let dir = TempDir::new().unwrap();
        let sidecar = dir.path().join("allowed.json");
        fs::write(&sidecar, "{not json").unwrap();
        assert!(SandboxConfig::load(&sidecar).is_err());
    }
}
