use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    sledge completions bash > ~/.bash_completion.d/sledge\n\n\
                  Generate zsh completions:\n    sledge completions zsh > ~/.zfunc/_sledge\n\n\
                  Generate fish completions:\n    sledge completions fish > ~/.config/fish/completions/sledge.fish\n\n\
                  Generate PowerShell completions:\n    sledge completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
