//! Path utilities shared across modules

use std::path::Path;

/// Convert a path to a forward-slashed string for platform-independent
/// glob matching and display.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Render a path for user-facing output, simplifying Windows UNC prefixes.
pub fn display_path(path: &Path) -> String {
    dunce::simplified(path).display().to_string()
}
