//! Shared helpers for command implementations

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::project::Project;
use crate::registry::Registry;

/// Locate and open the project from the CLI override or the current directory
pub fn open_project(override_root: Option<PathBuf>) -> Result<Project> {
    let root = Project::locate_root(override_root)?;
    Project::open(&root)
}

/// Locate the registry from the CLI override or the platform default
pub fn open_registry(override_root: Option<PathBuf>) -> Registry {
    Registry::locate(override_root)
}

/// Render a path relative to the project root where possible, for
/// compact report output
pub fn relative_display(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => crate::path_utils::display_path(rel),
        Err(_) => crate::path_utils::display_path(path),
    }
}
