//! depstage - declarative build-dependency staging
//!
//! A command line tool that reads a depstage.yaml manifest of exactly
//! pinned external packages, resolves them against a local package
//! registry, stages integration-glue files into the project source tree,
//! and declares the build directory layout.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod error;
mod generators;
mod hash;
mod layout;
mod lifecycle;
mod manifest;
mod path_utils;
mod project;
mod registry;
mod stage;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(cli.project, cli.registry, cli.verbose, args),
        Commands::Deps(args) => commands::deps::run(cli.project, cli.registry, args),
        Commands::Stage => commands::stage::run(cli.project, cli.registry, cli.verbose),
        Commands::Layout => commands::layout::run(cli.project),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
