//! Layout command implementation
//!
//! Prints the directory mapping the manifest's layout convention produces
//! for this project. Purely declarative; touches nothing on disk.

use std::path::PathBuf;

use console::Style;

use crate::commands::helpers::{open_project, relative_display};
use crate::error::Result;

/// Run layout command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let project = open_project(project)?;
    let dirs = project
        .manifest
        .layout
        .dirs(&project.root, &project.manifest.build_type);

    let bold = Style::new().bold();
    println!("{}", bold.apply_to("Layout:"));
    println!(
        "  source:     {}",
        relative_display(&dirs.source_root, &project.root)
    );
    println!(
        "  build:      {}",
        relative_display(&dirs.build_root, &project.root)
    );
    println!(
        "  generators: {}",
        relative_display(&dirs.generators_root, &project.root)
    );

    Ok(())
}
