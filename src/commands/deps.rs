//! Deps command implementation
//!
//! Prints the declared dependency set in declaration order; with
//! `--resolved`, also resolves each pin to its install path.

use std::path::PathBuf;

use console::Style;

use crate::cli::DepsArgs;
use crate::commands::helpers::{open_project, open_registry};
use crate::error::Result;

/// Run deps command
pub fn run(project: Option<PathBuf>, registry: Option<PathBuf>, args: DepsArgs) -> Result<()> {
    let project = open_project(project)?;

    if project.manifest.requires.is_empty() {
        println!("No dependencies declared.");
        return Ok(());
    }

    let table = if args.resolved {
        let registry = open_registry(registry);
        Some(registry.resolve(&project.manifest.requires)?)
    } else {
        None
    };

    println!(
        "Declared dependencies ({}):",
        project.manifest.requires.len()
    );
    for dep in &project.manifest.requires {
        let name = Style::new().bold().yellow().apply_to(&dep.name);
        match table.as_ref().and_then(|t| t.get(&dep.name)) {
            Some(path) => println!(
                "  {}/{}  {}",
                name,
                dep.version,
                Style::new()
                    .dim()
                    .apply_to(crate::path_utils::display_path(path))
            ),
            None => println!("  {}/{}", name, dep.version),
        }
    }

    Ok(())
}
