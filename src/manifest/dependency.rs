//! Dependency declaration in depstage.yaml
//!
//! A dependency is written as a single `name/version` reference, e.g.
//! `imgui/1.92.4`. The version is always an exact pin.

use serde::{Deserialize, Serialize};

use crate::error::{Result, manifest};

/// Characters that indicate a version range or wildcard rather than an
/// exact pin. Rejected during manifest validation.
const RANGE_CHARS: [char; 7] = ['*', '^', '~', '>', '<', '=', '|'];

/// A declared external package: a `(name, version)` pair with an exact pin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dependency {
    /// Package name, unique within the manifest
    pub name: String,

    /// Exact version pin (no ranges, no wildcards)
    pub version: String,
}

impl Dependency {
    /// Create a new dependency reference
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Render as the `name/version` reference form used in depstage.yaml
    pub fn reference(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }

    /// Validate that the version is an exact pin
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(manifest::invalid("Dependency name cannot be empty"));
        }
        if !is_exact_pin(&self.version) {
            return Err(manifest::invalid_pin(&self.name, &self.version));
        }
        Ok(())
    }
}

impl TryFrom<String> for Dependency {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let Some((name, version)) = value.split_once('/') else {
            return Err(format!(
                "invalid dependency reference '{}': expected name/version",
                value
            ));
        };
        if name.is_empty() || version.is_empty() {
            return Err(format!(
                "invalid dependency reference '{}': name and version must be non-empty",
                value
            ));
        }
        Ok(Self::new(name, version))
    }
}

impl From<Dependency> for String {
    fn from(dep: Dependency) -> Self {
        dep.reference()
    }
}

/// True if a version string is a fixed, exact pin
pub fn is_exact_pin(version: &str) -> bool {
    !version.is_empty()
        && !version.chars().any(char::is_whitespace)
        && !version.contains(RANGE_CHARS)
}
