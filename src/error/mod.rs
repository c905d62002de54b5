//! Error types and handling for depstage
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest parsing and validation errors
//! - [`registry`]: Package resolution errors
//! - [`stage`]: Asset staging errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

// Declare submodules
pub mod fs;
pub mod manifest;
pub mod registry;
pub mod stage;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use fs::{
    io_error, read_failed as file_read_failed, write_failed as file_write_failed,
};
#[allow(unused_imports)]
pub use manifest::{
    duplicate_dependency, invalid as manifest_invalid, invalid_pin,
    not_found as manifest_not_found, parse_failed as manifest_parse_failed,
    read_failed as manifest_read_failed, unknown_stage_dependency,
};
#[allow(unused_imports)]
pub use registry::unresolved as dependency_unresolved;
#[allow(unused_imports)]
pub use stage::{no_matches, source_missing as stage_source_missing};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for depstage operations
#[derive(Error, Diagnostic, Debug)]
pub enum DepstageError {
    // Manifest errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(depstage::manifest::not_found),
        help("Run depstage from a directory containing depstage.yaml, or pass --project")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read manifest: {path}")]
    #[diagnostic(code(depstage::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}")]
    #[diagnostic(code(depstage::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(depstage::manifest::invalid))]
    ManifestInvalid { message: String },

    #[error("Duplicate dependency: {name}")]
    #[diagnostic(
        code(depstage::manifest::duplicate_dependency),
        help("Each package may be declared at most once in 'requires'")
    )]
    DuplicateDependency { name: String },

    #[error("Invalid version pin for '{name}': {version}")]
    #[diagnostic(
        code(depstage::manifest::invalid_pin),
        help("Versions must be exact pins (e.g. 1.92.4); ranges and wildcards are not allowed")
    )]
    InvalidVersionPin { name: String, version: String },

    #[error("Copy rule references undeclared dependency: {name}")]
    #[diagnostic(
        code(depstage::manifest::unknown_stage_dependency),
        help("Every 'stage' rule's 'from' must name a package listed under 'requires'")
    )]
    UnknownStageDependency { name: String },

    // Registry errors
    #[error("Dependency '{name}/{version}' is not installed")]
    #[diagnostic(
        code(depstage::registry::unresolved),
        help("Expected an installed package at '{path}'. Check the registry root (--registry or DEPSTAGE_REGISTRY)")
    )]
    DependencyUnresolved {
        name: String,
        version: String,
        path: String,
    },

    // Staging errors
    #[error("Staging source directory is missing for '{dependency}': {path}")]
    #[diagnostic(
        code(depstage::stage::source_missing),
        help("The resolved package does not contain the expected resource directory; nothing was copied")
    )]
    StageSourceMissing { dependency: String, path: String },

    #[error("No files matched pattern '{pattern}' under {path}")]
    #[diagnostic(
        code(depstage::stage::no_matches),
        help("Staging patterns must match at least one file; nothing was copied")
    )]
    NoFilesMatched { pattern: String, path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(depstage::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(depstage::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(depstage::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DepstageError {
    fn from(err: std::io::Error) -> Self {
        DepstageError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DepstageError {
    fn from(err: serde_yaml::Error) -> Self {
        DepstageError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DepstageError>;
