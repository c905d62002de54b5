//! Generator file emission
//!
//! After staging, the generate phase writes one file per declared generator
//! into the generated-files root, so the downstream CMake build can locate
//! the resolved packages without depstage being on its path.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::common::fs::write_file;
use crate::error::Result;
use crate::layout::LayoutDirs;
use crate::registry::PackageTable;

/// A generator declared in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generator {
    /// Per-package root variables: `set(DEPSTAGE_<NAME>_ROOT ...)`
    CMakeDeps,

    /// `CMAKE_PREFIX_PATH` covering all resolved package roots
    CMakeToolchain,
}

impl Generator {
    /// File name the generator writes under the generated-files root
    pub fn file_name(self) -> &'static str {
        match self {
            Generator::CMakeDeps => "depstage_deps.cmake",
            Generator::CMakeToolchain => "depstage_toolchain.cmake",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::CMakeDeps => write!(f, "CMakeDeps"),
            Generator::CMakeToolchain => write!(f, "CMakeToolchain"),
        }
    }
}

/// Emit every declared generator file; returns the written paths
pub fn emit(
    generators: &[Generator],
    table: &PackageTable,
    dirs: &LayoutDirs,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(generators.len());
    for generator in generators {
        let target = dirs.generators_root.join(generator.file_name());
        let contents = match generator {
            Generator::CMakeDeps => render_deps(table),
            Generator::CMakeToolchain => render_toolchain(table),
        };
        write_file(&target, &contents)?;
        written.push(target);
    }
    Ok(written)
}

fn render_deps(table: &PackageTable) -> String {
    let mut out = String::from("# Generated by depstage; do not edit.\n");
    for (name, path) in table.iter() {
        out.push_str(&format!(
            "set(DEPSTAGE_{}_ROOT \"{}\")\n",
            cmake_var_name(name),
            crate::path_utils::to_forward_slashes(path)
        ));
    }
    out
}

fn render_toolchain(table: &PackageTable) -> String {
    let mut out = String::from("# Generated by depstage; do not edit.\n");
    out.push_str("list(APPEND CMAKE_PREFIX_PATH\n");
    for (_, path) in table.iter() {
        out.push_str(&format!(
            "    \"{}\"\n",
            crate::path_utils::to_forward_slashes(path)
        ));
    }
    out.push_str(")\n");
    out
}

/// Uppercase a package name into a CMake variable fragment
fn cmake_var_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutKind;
    use tempfile::TempDir;

    fn table() -> PackageTable {
        PackageTable::from_entries([
            ("imgui", "/pkgs/imgui/1.92.4"),
            ("vulkan-memory-allocator", "/pkgs/vma/3.3.0"),
        ])
    }

    #[test]
    fn test_cmake_var_name() {
        assert_eq!(cmake_var_name("imgui"), "IMGUI");
        assert_eq!(
            cmake_var_name("vulkan-memory-allocator"),
            "VULKAN_MEMORY_ALLOCATOR"
        );
    }

    #[test]
    fn test_render_deps() {
        let rendered = render_deps(&table());
        assert!(rendered.contains("set(DEPSTAGE_IMGUI_ROOT \"/pkgs/imgui/1.92.4\")"));
        assert!(
            rendered.contains("set(DEPSTAGE_VULKAN_MEMORY_ALLOCATOR_ROOT \"/pkgs/vma/3.3.0\")")
        );
    }

    #[test]
    fn test_render_toolchain() {
        let rendered = render_toolchain(&table());
        assert!(rendered.contains("CMAKE_PREFIX_PATH"));
        assert!(rendered.contains("/pkgs/imgui/1.92.4"));
        assert!(rendered.contains("/pkgs/vma/3.3.0"));
    }

    #[test]
    fn test_emit_writes_declared_generators() {
        let temp = TempDir::new().unwrap();
        let dirs = LayoutKind::Standard.dirs(temp.path(), "Release");

        let written = emit(
            &[Generator::CMakeDeps, Generator::CMakeToolchain],
            &table(),
            &dirs,
        )
        .unwrap();

        assert_eq!(written.len(), 2);
        assert!(dirs.generators_root.join("depstage_deps.cmake").exists());
        assert!(dirs.generators_root.join("depstage_toolchain.cmake").exists());
    }

    #[test]
    fn test_emit_none_declared() {
        let temp = TempDir::new().unwrap();
        let dirs = LayoutKind::Standard.dirs(temp.path(), "Release");
        let written = emit(&[], &table(), &dirs).unwrap();
        assert!(written.is_empty());
        assert!(!dirs.generators_root.exists());
    }
}
