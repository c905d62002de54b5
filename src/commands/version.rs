//! Version command implementation

use crate::error::Result;
use crate::registry::Registry;

/// Print the depstage version and the environment it would operate in
pub fn run() -> Result<()> {
    println!("depstage {} ({})", env!("CARGO_PKG_VERSION"), build_profile());
    println!();
    println!("Environment:");
    println!("  Manifest file:    {}", crate::project::MANIFEST_FILE);
    println!(
        "  Default registry: {}",
        crate::path_utils::display_path(Registry::locate(None).root())
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
