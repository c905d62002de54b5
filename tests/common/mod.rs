//! Common test utilities for depstage integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// The reference manifest mirrors the pinned dependency set of the
/// original graphics project this tool configures.
pub const REFERENCE_MANIFEST: &str = r#"
name: vulkan-sandbox
version: 0.0.1

generators:
  - CMakeDeps
  - CMakeToolchain

requires:
  - imgui/1.92.4
  - glfw/3.4
  - glm/1.0.1
  - glslang/1.4.313.0
  - doctest/2.4.11
  - vulkan-memory-allocator/3.3.0
  - entt/3.15.0

stage:
  - pattern: "*glfw*"
    from: imgui
    subdir: res/bindings
    into: bindings
  - pattern: "*vulkan*"
    from: imgui
    subdir: res/bindings
    into: bindings

layout: standard
"#;

/// A test project with its own package registry
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory holding both the project and the registry
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub root: PathBuf,
    /// Path to the registry root
    pub registry: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("project");
        let registry = temp.path().join("registry");
        std::fs::create_dir_all(&root).expect("Failed to create project directory");
        std::fs::create_dir_all(&registry).expect("Failed to create registry directory");
        Self {
            temp,
            root,
            registry,
        }
    }

    /// Write the depstage.yaml manifest
    pub fn write_manifest(&self, yaml: &str) {
        std::fs::write(self.root.join("depstage.yaml"), yaml)
            .expect("Failed to write manifest");
    }

    /// Install an empty package into the registry, returning its directory
    pub fn install_package(&self, name: &str, version: &str) -> PathBuf {
        let dir = self.registry.join(name).join(version);
        std::fs::create_dir_all(&dir).expect("Failed to create package directory");
        dir
    }

    /// Write a file into an installed package
    pub fn write_package_file(&self, name: &str, version: &str, rel: &str, content: &str) {
        let path = self.registry.join(name).join(version).join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write package file");
    }

    /// Install every package the reference manifest pins, with the imgui
    /// bindings files staging expects
    pub fn install_reference_packages(&self) {
        for (name, version) in [
            ("imgui", "1.92.4"),
            ("glfw", "3.4"),
            ("glm", "1.0.1"),
            ("glslang", "1.4.313.0"),
            ("doctest", "2.4.11"),
            ("vulkan-memory-allocator", "3.3.0"),
            ("entt", "3.15.0"),
        ] {
            self.install_package(name, version);
        }
        self.write_package_file(
            "imgui",
            "1.92.4",
            "res/bindings/imgui_impl_glfw.h",
            "glfw binding header",
        );
        self.write_package_file(
            "imgui",
            "1.92.4",
            "res/bindings/imgui_impl_vulkan.h",
            "vulkan binding header",
        );
    }

    /// Check if a file exists under the project root
    pub fn file_exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    /// Read a file from the project root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.root.join(path)).expect("Failed to read file")
    }

    /// Build a depstage command pointed at this project and registry
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = depstage_cmd();
        cmd.current_dir(&self.root)
            .env("DEPSTAGE_REGISTRY", &self.registry);
        cmd
    }
}

/// Build a bare depstage command
#[allow(deprecated)]
pub fn depstage_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("depstage").expect("Failed to find depstage binary")
}
