//! Asset staging errors

use super::DepstageError;

/// Creates a staging source missing error
pub fn source_missing(
    dependency: impl Into<String>,
    path: impl Into<String>,
) -> DepstageError {
    DepstageError::StageSourceMissing {
        dependency: dependency.into(),
        path: path.into(),
    }
}

/// Creates a no files matched error
pub fn no_matches(pattern: impl Into<String>, path: impl Into<String>) -> DepstageError {
    DepstageError::NoFilesMatched {
        pattern: pattern.into(),
        path: path.into(),
    }
}
