use clap::Parser;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Configure the project in the current directory:\n    depstage run\n\n\
                   Show the staging plan without writing:\n    depstage run --dry-run\n\n\
                   Use an explicit registry:\n    depstage run --registry ~/pkgs")]
pub struct RunArgs {
    /// Plan staging and print what would be copied without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
