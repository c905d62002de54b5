//! Project manifest (depstage.yaml)
//!
//! The manifest is the whole configuration surface of a depstage project:
//! the project's own identity, the pinned dependency set, the staging copy
//! rules, the declared generators, and the layout convention.
//!
//! ```yaml
//! name: vulkan-sandbox
//! version: 0.0.1
//! build_type: Release
//!
//! generators:
//!   - CMakeDeps
//!   - CMakeToolchain
//!
//! requires:
//!   - imgui/1.92.4
//!   - glfw/3.4
//!
//! stage:
//!   - pattern: "*glfw*"
//!     from: imgui
//!     subdir: res/bindings
//!     into: bindings
//!
//! layout: standard
//! ```

pub mod copy_rule;
pub mod dependency;

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use copy_rule::CopyRule;
pub use dependency::Dependency;

use crate::error::{Result, manifest};
use crate::generators::Generator;
use crate::layout::LayoutKind;

fn default_build_type() -> String {
    "Release".to_string()
}

/// Parsed and validated depstage.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Project name
    pub name: String,

    /// Project version
    pub version: String,

    /// Build type parameterizing the build output directory
    #[serde(default = "default_build_type")]
    pub build_type: String,

    /// Generator files to emit into the generated-files root
    #[serde(default)]
    pub generators: Vec<Generator>,

    /// Pinned external dependencies, in declaration order
    #[serde(default)]
    pub requires: Vec<Dependency>,

    /// Staging copy rules, evaluated after dependency resolution
    #[serde(default)]
    pub stage: Vec<CopyRule>,

    /// Directory layout convention
    #[serde(default)]
    pub layout: LayoutKind,
}

impl Manifest {
    /// Parse a manifest from YAML; `path` is used for error reporting only
    pub fn from_yaml(yaml: &str, path: &str) -> Result<Self> {
        let parsed: Self = serde_yaml::from_str(yaml)
            .map_err(|e| manifest::parse_failed(path, e.to_string()))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Load and validate a manifest from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(manifest::not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| manifest::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content, &path.display().to_string())
    }

    /// Validate manifest invariants: non-empty identity, unique dependency
    /// names, exact version pins, and copy rules referencing declared
    /// dependencies only
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(manifest::invalid("Project name cannot be empty"));
        }
        if self.version.is_empty() {
            return Err(manifest::invalid("Project version cannot be empty"));
        }
        if self.build_type.is_empty() {
            return Err(manifest::invalid("build_type cannot be empty"));
        }

        let mut seen = BTreeSet::new();
        for dep in &self.requires {
            dep.validate()?;
            if !seen.insert(dep.name.as_str()) {
                return Err(manifest::duplicate_dependency(&dep.name));
            }
        }

        let declared: Vec<&str> = self.requires.iter().map(|d| d.name.as_str()).collect();
        for rule in &self.stage {
            rule.validate(&declared)?;
        }

        Ok(())
    }

    /// Look up a declared dependency by name
    pub fn find_dependency(&self, name: &str) -> Option<&Dependency> {
        self.requires.iter().find(|d| d.name == name)
    }
}
