//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - run: Run command arguments
//! - deps: Deps command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod deps;
pub mod run;

pub use completions::CompletionsArgs;
pub use deps::DepsArgs;
pub use run::RunArgs;

/// depstage - declarative build-dependency staging
#[derive(Parser, Debug)]
#[command(
    name = "depstage",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Declarative build-dependency staging for C++ projects",
    long_about = "depstage reads a depstage.yaml manifest of exactly pinned external packages, \
                  resolves them against a local package registry, stages integration-glue files \
                  into the project source tree, and declares the build directory layout.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  depstage run                  \x1b[90m# Resolve, stage, and declare layout\x1b[0m\n   \
                  depstage run --dry-run        \x1b[90m# Show what staging would copy\x1b[0m\n   \
                  depstage deps --resolved      \x1b[90m# Print pins with install paths\x1b[0m\n   \
                  depstage stage                \x1b[90m# Run only the staging rules\x1b[0m\n   \
                  depstage layout               \x1b[90m# Print the directory mapping\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory containing depstage.yaml (defaults to walking up
    /// from the current directory)
    #[arg(long, short = 'p', global = true, env = "DEPSTAGE_PROJECT")]
    pub project: Option<PathBuf>,

    /// Package registry root (defaults to the platform cache directory)
    #[arg(long, global = true, env = "DEPSTAGE_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full lifecycle: requirements, generate, layout
    Run(RunArgs),

    /// Print the declared dependency set
    Deps(DepsArgs),

    /// Run only the staging copy rules
    Stage,

    /// Print the directory layout mapping
    Layout,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
