//! Local package registry and resolution
//!
//! The registry is a directory of installed packages laid out as
//! `<root>/<name>/<version>/`. Resolution turns the manifest's declared
//! dependency set into a [`PackageTable`]: a read-only mapping from logical
//! package name to its concrete install directory.
//!
//! The table is built once per run, before staging begins, and is passed
//! explicitly into the stager and generators so those stay unit-testable
//! without any ambient registry lookup.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, registry};
use crate::manifest::Dependency;

/// Default registry directory name under the platform cache dir
const REGISTRY_DIR: &str = "depstage/packages";

/// A local store of installed packages
#[derive(Debug, Clone)]
pub struct Registry {
    root: PathBuf,
}

impl Registry {
    /// Create a registry rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the registry from a CLI override or the platform default
    /// (`<cache-dir>/depstage/packages`)
    pub fn locate(override_root: Option<PathBuf>) -> Self {
        let root = override_root.unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from(".cache"))
                .join(REGISTRY_DIR)
        });
        Self::new(root)
    }

    /// Registry root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Install directory for a declared dependency: `<root>/<name>/<version>`
    pub fn package_dir(&self, dep: &Dependency) -> PathBuf {
        self.root.join(&dep.name).join(&dep.version)
    }

    /// Resolve every declared dependency to its install directory.
    ///
    /// Fails on the first dependency whose package directory is absent;
    /// nothing downstream (staging, generators) runs in that case.
    pub fn resolve(&self, requires: &[Dependency]) -> Result<PackageTable> {
        let mut entries = BTreeMap::new();
        for dep in requires {
            let dir = self.package_dir(dep);
            if !dir.is_dir() {
                return Err(registry::unresolved(
                    &dep.name,
                    &dep.version,
                    dir.display().to_string(),
                ));
            }
            entries.insert(dep.name.clone(), dir);
        }
        Ok(PackageTable { entries })
    }
}

/// Read-only mapping from package name to resolved install directory
#[derive(Debug, Clone, Default)]
pub struct PackageTable {
    entries: BTreeMap<String, PathBuf>,
}

impl PackageTable {
    /// Build a table from explicit entries (used in tests and by callers
    /// that resolve packages some other way)
    pub fn from_entries<I, N, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(n, p)| (n.into(), p.into()))
                .collect(),
        }
    }

    /// Resolved install directory for a package, if present
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Iterate entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(n, p)| (n.as_str(), p.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
