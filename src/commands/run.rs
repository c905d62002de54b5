//! Run command implementation
//!
//! Executes the full configuration lifecycle (requirements, generate,
//! layout) and prints a report of what was resolved, staged, generated,
//! and declared.

use std::path::PathBuf;

use console::Style;

use crate::cli::RunArgs;
use crate::commands::helpers::{open_project, open_registry, relative_display};
use crate::error::Result;
use crate::lifecycle::{self, Context};

/// Run the full lifecycle
pub fn run(
    project: Option<PathBuf>,
    registry: Option<PathBuf>,
    verbose: bool,
    args: RunArgs,
) -> Result<()> {
    let project = open_project(project)?;
    let registry = open_registry(registry);

    let mut ctx = Context::new(&project.manifest, &registry, &project.root);
    ctx.dry_run = args.dry_run;
    lifecycle::run_all(&mut ctx)?;

    let bold = Style::new().bold();
    println!(
        "{} {}/{}",
        bold.apply_to("Project:"),
        project.manifest.name,
        project.manifest.version
    );
    println!(
        "{} {}",
        bold.apply_to("Registry:"),
        crate::path_utils::display_path(registry.root())
    );

    if let Some(table) = &ctx.table {
        println!("{} {} package(s)", bold.apply_to("Resolved:"), table.len());
        if verbose {
            for dep in &project.manifest.requires {
                if let Some(path) = table.get(&dep.name) {
                    println!(
                        "  {} -> {}",
                        Style::new().cyan().apply_to(dep.reference()),
                        crate::path_utils::display_path(path)
                    );
                }
            }
        }
    }

    if args.dry_run {
        if let Some(plan) = &ctx.plan {
            println!(
                "{} {} file(s) would be staged",
                bold.apply_to("Dry run:"),
                plan.actions.len()
            );
            for action in &plan.actions {
                println!(
                    "  {}",
                    Style::new()
                        .dim()
                        .apply_to(relative_display(&action.target, &project.root))
                );
            }
        }
        return Ok(());
    }

    if let Some(report) = &ctx.report {
        println!(
            "{} {} file(s) copied, {} up to date",
            bold.apply_to("Staged:"),
            report.copied.len(),
            report.skipped.len()
        );
        if verbose {
            for path in &report.copied {
                println!(
                    "  {}",
                    Style::new()
                        .dim()
                        .apply_to(relative_display(path, &project.root))
                );
            }
        }
    }

    if !ctx.generated.is_empty() {
        println!("{} {} file(s)", bold.apply_to("Generated:"), ctx.generated.len());
        for path in &ctx.generated {
            println!(
                "  {}",
                Style::new()
                    .dim()
                    .apply_to(relative_display(path, &project.root))
            );
        }
    }

    if let Some(layout) = &ctx.layout {
        println!("{}", bold.apply_to("Layout:"));
        println!(
            "  source:     {}",
            relative_display(&layout.source_root, &project.root)
        );
        println!(
            "  build:      {}",
            relative_display(&layout.build_root, &project.root)
        );
        println!(
            "  generators: {}",
            relative_display(&layout.generators_root, &project.root)
        );
    }

    Ok(())
}
