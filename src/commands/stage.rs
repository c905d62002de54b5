//! Stage command implementation
//!
//! Resolves the dependency set and runs only the staging copy rules,
//! without emitting generator files.

use std::path::PathBuf;

use console::Style;

use crate::commands::helpers::{open_project, open_registry, relative_display};
use crate::error::Result;
use crate::stage;

/// Run stage command
pub fn run(project: Option<PathBuf>, registry: Option<PathBuf>, verbose: bool) -> Result<()> {
    let project = open_project(project)?;

    if project.manifest.stage.is_empty() {
        println!("No staging rules declared.");
        return Ok(());
    }

    let registry = open_registry(registry);
    let table = registry.resolve(&project.manifest.requires)?;
    let report = stage::stage(&project.manifest.stage, &table, &project.root)?;

    println!(
        "{} {} file(s) copied, {} up to date",
        Style::new().bold().apply_to("Staged:"),
        report.copied.len(),
        report.skipped.len()
    );
    if verbose {
        for path in report.copied.iter().chain(report.skipped.iter()) {
            println!(
                "  {}",
                Style::new()
                    .dim()
                    .apply_to(relative_display(path, &project.root))
            );
        }
    }

    Ok(())
}
