//! Manifest errors

use super::DepstageError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> DepstageError {
    DepstageError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DepstageError {
    DepstageError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DepstageError {
    DepstageError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid(message: impl Into<String>) -> DepstageError {
    DepstageError::ManifestInvalid {
        message: message.into(),
    }
}

/// Creates a duplicate dependency error
pub fn duplicate_dependency(name: impl Into<String>) -> DepstageError {
    DepstageError::DuplicateDependency { name: name.into() }
}

/// Creates an invalid version pin error
pub fn invalid_pin(name: impl Into<String>, version: impl Into<String>) -> DepstageError {
    DepstageError::InvalidVersionPin {
        name: name.into(),
        version: version.into(),
    }
}

/// Creates an unknown stage dependency error
pub fn unknown_stage_dependency(name: impl Into<String>) -> DepstageError {
    DepstageError::UnknownStageDependency { name: name.into() }
}
