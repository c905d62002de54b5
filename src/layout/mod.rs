//! Directory layout convention
//!
//! The layout declaration keeps build artifacts and generated files out of
//! the source tree. Only the standard convention exists today; the enum
//! leaves room for alternatives without changing the manifest format.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Named layout convention selected in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Source at the project root, build output under `build/<build_type>`,
    /// generated files under `build/generators`
    #[default]
    Standard,
}

/// Concrete directory mapping produced by applying a layout convention
/// to a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDirs {
    /// Root of first-party sources
    pub source_root: PathBuf,

    /// Root for build output, parameterized by build type
    pub build_root: PathBuf,

    /// Root for files depstage itself generates
    pub generators_root: PathBuf,
}

impl LayoutKind {
    /// Apply the convention to a project root
    pub fn dirs(self, project_root: &Path, build_type: &str) -> LayoutDirs {
        match self {
            LayoutKind::Standard => LayoutDirs {
                source_root: project_root.to_path_buf(),
                build_root: project_root.join("build").join(build_type),
                generators_root: project_root.join("build").join("generators"),
            },
        }
    }
}
