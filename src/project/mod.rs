//! Project detection and loading
//!
//! A depstage project is any directory containing a `depstage.yaml`
//! manifest. Commands locate the project root either from the `--project`
//! flag or by walking up from the current directory.

use std::path::{Path, PathBuf};

use crate::error::{Result, manifest as manifest_error};
use crate::manifest::Manifest;

/// Manifest filename marking a project root
pub const MANIFEST_FILE: &str = "depstage.yaml";

/// A loaded depstage project
#[derive(Debug)]
pub struct Project {
    /// Directory containing depstage.yaml; also the source root
    pub root: PathBuf,

    /// Parsed and validated manifest
    pub manifest: Manifest,
}

impl Project {
    /// Walk up from `start` looking for a directory containing the manifest
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = Some(start);
        while let Some(dir) = current {
            if dir.join(MANIFEST_FILE).is_file() {
                return Some(dir.to_path_buf());
            }
            current = dir.parent();
        }
        None
    }

    /// Open a project rooted at the given directory
    pub fn open(root: &Path) -> Result<Self> {
        let manifest = Manifest::load(&root.join(MANIFEST_FILE))?;
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }

    /// Resolve the project root from a CLI override or the current directory
    pub fn locate_root(override_root: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(root) = override_root {
            return Ok(root);
        }
        let cwd = std::env::current_dir().map_err(|e| crate::error::fs::io_error(format!(
            "Failed to get current directory: {}",
            e
        )))?;
        Self::find_from(&cwd).ok_or_else(|| {
            manifest_error::not_found(cwd.join(MANIFEST_FILE).display().to_string())
        })
    }
}
