use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    depstage completions bash > ~/.bash_completion.d/depstage\n\n\
                  Generate zsh completions:\n    depstage completions zsh > ~/.zfunc/_depstage\n\n\
                  Generate fish completions:\n    depstage completions fish > ~/.config/fish/completions/depstage.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
