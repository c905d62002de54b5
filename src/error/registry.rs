//! Package resolution errors

use super::DepstageError;

/// Creates a dependency unresolved error
pub fn unresolved(
    name: impl Into<String>,
    version: impl Into<String>,
    path: impl Into<String>,
) -> DepstageError {
    DepstageError::DependencyUnresolved {
        name: name.into(),
        version: version.into(),
        path: path.into(),
    }
}
