//! Path sandbox - the trust boundary for every file operation
//!
//! A candidate path is resolved to an absolute, lexically normalized
//! form before the prefix check against the allowed-directory set.
//! Normalizing first is what defeats `../../etc/passwd`-style escapes;
//! a string-prefix test on the raw input would not.

mod config;

pub use config::SandboxConfig;

use std::env;
use std::path::{Component, Path, PathBuf};

use parking_lot::RwLock;

use crate::error::{ToolError, ToolResult};

/// Outcome of an add_directory call, carrying the normalized path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(PathBuf),
    /// Idempotent no-op, reported as a success message
    AlreadyAllowed(PathBuf),
}

/// Mutable allowed-directory set with sidecar persistence
pub struct PathSandbox {
    allowed: RwLock<Vec<PathBuf>>,
    config_path: PathBuf,
}

impl PathSandbox {
    /// Create a sandbox from startup directories, merging in any
    /// directories persisted in the sidecar.
    ///
    /// The merged set is deduplicated and ordered with startup
    /// arguments first. The set must not end up empty.
    pub fn new(startup_dirs: Vec<PathBuf>, config_path: PathBuf) -> ToolResult<Self> {
        let mut allowed: Vec<PathBuf> = Vec::new();
        for dir in startup_dirs {
            let dir = normalize_path(&dir);
            if !allowed.contains(&dir) {
                allowed.push(dir);
            }
        }

        match SandboxConfig::load(&config_path) {
            Ok(Some(config)) => {
                for dir in config.allowed_directories {
                    let dir = normalize_path(Path::new(&dir));
                    if !allowed.contains(&dir) {
                        allowed.push(dir);
                    }
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to load allowed-directory sidecar, ignoring it"
                );
            }
        }

        if allowed.is_empty() {
            return Err(ToolError::InvalidArgument(
                "at least one allowed directory is required".to_string(),
            ));
        }

        Ok(Self {
            allowed: RwLock::new(allowed),
            config_path,
        })
    }

    /// Validate a candidate path against the allowed-directory set.
    ///
    /// Returns the normalized absolute path, or AccessDenied when it
    /// is not equal to or nested under any allowed directory.
    pub fn validate(&self, candidate: &Path) -> ToolResult<PathBuf> {
        let normalized = normalize_path(candidate);
        let allowed = self.allowed.read();
        if allowed.iter().any(|root| normalized.starts_with(root)) {
            Ok(normalized)
        } else {
            Err(ToolError::AccessDenied(candidate.to_path_buf()))
        }
    }

    /// Append a directory to the allowed set and persist the sidecar.
    ///
    /// Fails with NotADirectory when the resolved path does not exist
    /// or is not a directory. An already-present directory is a no-op
    /// success. A sidecar write failure rolls the in-memory append
    /// back before surfacing.
    pub fn add_directory(&self, path: &Path) -> ToolResult<AddOutcome> {
        let normalized = normalize_path(path);
        if !normalized.is_dir() {
            return Err(ToolError::NotADirectory(normalized.display().to_string()));
        }

        let mut allowed = self.allowed.write();
        if allowed.contains(&normalized) {
            return Ok(AddOutcome::AlreadyAllowed(normalized));
        }

        allowed.push(normalized.clone());
        if let Err(e) = SandboxConfig::save(&self.config_path, &allowed) {
            allowed.pop();
            return Err(e);
        }
        Ok(AddOutcome::Added(normalized))
    }

    /// Remove a directory from the allowed set and persist the
    /// sidecar.
    ///
    /// Fails with NotFound when absent and with LastDirectory when the
    /// removal would empty the set; in both cases the set is left
    /// unchanged. A sidecar write failure restores the entry before
    /// surfacing.
    pub fn remove_directory(&self, path: &Path) -> ToolResult<PathBuf> {
        let normalized = normalize_path(path);
        let mut allowed = self.allowed.write();

        let index = allowed
            .iter()
            .position(|d| d == &normalized)
            .ok_or_else(|| ToolError::NotFound(normalized.display().to_string()))?;

        if allowed.len() == 1 {
            return Err(ToolError::LastDirectory(normalized.display().to_string()));
        }

        let removed = allowed.remove(index);
        if let Err(e) = SandboxConfig::save(&self.config_path, &allowed) {
            allowed.insert(index, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Current allowed directories, in order
    pub fn list(&self) -> Vec<PathBuf> {
        self.allowed.read().clone()
    }

    /// Number of allowed directories
    pub fn count(&self) -> usize {
        self.allowed.read().len()
    }
}

/// Resolve a path to absolute form and lexically collapse `.` and `..`
/// segments.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("/"))
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sandbox_for(root: &Path) -> (PathSandbox, TempDir) {
        let config_dir = TempDir::new().unwrap();
        let sandbox = PathSandbox::new(
            vec![root.to_path_buf()],
            config_dir.path().join("allowed.json"),
        )
        .unwrap();
        (sandbox, config_dir)
    }

    #[test]
    fn test_validate_inside_root() {
        let root = TempDir::new().unwrap();
        let (sandbox, _cfg) = sandbox_for(root.path());

        let result = sandbox.validate(&root.path().join("sub/file.txt"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_outside_root() {
        let root = TempDir::new().unwrap();
        let (sandbox, _cfg) = sandbox_for(root.path());

        let err = sandbox.validate(Path::new("/etc/passwd")).unwrap_err();
        assert!(matches!(err, ToolError::AccessDenied(_)));
    }

    #[test]
    fn test_validate_rejects_dotdot_escape() {
        let root = TempDir::new().unwrap();
        let (sandbox, _cfg) = sandbox_for(root.path());

        let sneaky = root.path().join("sub/../../../etc/passwd");
        let err = sandbox.validate(&sneaky).unwrap_err();
        assert!(matches!(err, ToolError::AccessDenied(_)));
    }

    #[test]
    fn test_normalize_collapses_segments() {
        let normalized = normalize_path(Path::new("/a/b/./c/../d"));
        assert_eq!(normalized, PathBuf::from("/a/b/d"));
    }

    #[test]
    fn test_remove_last_directory_is_rolled_back() {
        let root = TempDir::new().unwrap();
        let (sandbox, _cfg) = sandbox_for(root.path());

        let before = sandbox.count();
        let err = sandbox.remove_directory(root.path()).unwrap_err();
        assert!(matches!(err, ToolError::LastDirectory(_)));
        assert_eq!(sandbox.count(), before);
    }

    #[test]
    fn test_add_directory_idempotent() {
        let root = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let (sandbox, _cfg) = sandbox_for(root.path());

        assert!(matches!(
            sandbox.add_directory(other.path()).unwrap(),
            AddOutcome::Added(_)
        ));
        assert!(matches!(
            sandbox.add_directory(other.path()).unwrap(),
            AddOutcome::AlreadyAllowed(_)
        ));
        assert_eq!(sandbox.count(), 2);
    }

    #[test]
    fn test_add_directory_rejects_missing_path() {
        let root = TempDir::new().unwrap();
        let (sandbox, _cfg) = sandbox_for(root.path());

        let err = sandbox
            .add_directory(&root.path().join("does-not-exist"))
            .unwrap_err();
        assert!(matches!(err, ToolError::NotADirectory(_)));
    }

    #[test]
    fn test_sidecar_extends_startup_dirs() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let config_dir = TempDir::new().unwrap();
        let sidecar = config_dir.path().join("allowed.json");

        SandboxConfig::save(&sidecar, &[b.path().to_path_buf()]).unwrap();

        let sandbox = PathSandbox::new(vec![a.path().to_path_buf()], sidecar).unwrap();
        let dirs = sandbox.list();
        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs[0], normalize_path(a.path()));
        assert_eq!(dirs[1], normalize_path(b.path()));
    }
}
