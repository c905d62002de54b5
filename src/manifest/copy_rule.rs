//! Copy rule declaration in depstage.yaml
//!
//! A copy rule stages files from one resolved package's resource directory
//! into the local source tree.

use serde::{Deserialize, Serialize};

use crate::error::{Result, manifest};

/// A staging rule: copy files matching `pattern` from dependency `from`'s
/// `subdir` into the project-relative directory `into`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyRule {
    /// Glob pattern matched against files under the source directory
    pub pattern: String,

    /// Name of the dependency whose install directory is the copy source
    pub from: String,

    /// Subdirectory under the dependency's install root (e.g. `res/bindings`)
    #[serde(default)]
    pub subdir: String,

    /// Destination directory, relative to the project source root
    pub into: String,
}

impl CopyRule {
    /// Validate rule fields against the declared dependency names
    pub fn validate(&self, declared: &[&str]) -> Result<()> {
        if self.pattern.is_empty() {
            return Err(manifest::invalid("Copy rule pattern cannot be empty"));
        }
        if self.into.is_empty() {
            return Err(manifest::invalid(
                "Copy rule destination ('into') cannot be empty",
            ));
        }
        if !declared.contains(&self.from.as_str()) {
            return Err(manifest::unknown_stage_dependency(&self.from));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> CopyRule {
        CopyRule {
            pattern: "*glfw*".to_string(),
            from: "imgui".to_string(),
            subdir: "res/bindings".to_string(),
            into: "bindings".to_string(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(rule().validate(&["imgui", "glfw"]).is_ok());
    }

    #[test]
    fn test_validate_undeclared_dependency() {
        let result = rule().validate(&["glfw"]);
        assert!(matches!(
            result.unwrap_err(),
            crate::error::DepstageError::UnknownStageDependency { .. }
        ));
    }

    #[test]
    fn test_validate_empty_pattern() {
        let mut r = rule();
        r.pattern = String::new();
        assert!(r.validate(&["imgui"]).is_err());
    }

    #[test]
    fn test_validate_empty_destination() {
        let mut r = rule();
        r.into = String::new();
        assert!(r.validate(&["imgui"]).is_err());
    }
}
