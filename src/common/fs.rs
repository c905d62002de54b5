//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{DepstageError, Result};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DepstageError::FileWriteFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// Copy a single file, overwriting any existing destination file.
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;
    fs::copy(source, target).map_err(|e| DepstageError::FileWriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Write a string to a file, creating parent directories as needed.
pub fn write_file(target: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(target)?;
    fs::write(target, contents).map_err(|e| DepstageError::FileWriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
