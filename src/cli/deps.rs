use clap::Parser;

/// Arguments for the deps command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Print declared pins:\n    depstage deps\n\n\
                   Print pins with resolved install paths:\n    depstage deps --resolved")]
pub struct DepsArgs {
    /// Resolve each dependency and print its install path
    #[arg(long)]
    pub resolved: bool,
}
