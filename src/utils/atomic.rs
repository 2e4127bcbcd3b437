//! Atomic file operations
//!
//! Utilities for atomic file writes to prevent data corruption during
//! crashes or power failures.
//!
//! # Pattern
//!
//! 1. Write to a temporary file (.tmp)
//! 2. Call sync_all() to flush to disk
//! 3. Rename temp file to final path (atomic on most filesystems)
//!
//! This ensures that the final file is either the old version (crash
//! before rename) or the new version (rename completed), never a
//! partial state.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Atomically write content to a file
///
/// Writes content to a `.tmp` sibling, syncs it to disk, then renames
/// it over the final path. The parent directory is created if missing.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}
