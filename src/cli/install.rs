use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install for the last used version:\n    sledge install\n\n\
                   Install for a specific version:\n    sledge install 1.21.4\n\n\
                   Install into another game directory:\n    sledge install 1.21.4 --dir ~/games/mc\n\n\
                   Fail if the agent or API cannot be installed:\n    sledge install 1.21.4 --strict")]
pub struct InstallArgs {
    /// Minecraft version to build the profile from (defaults to lastVersion)
    pub version: Option<String>,

    /// Minecraft directory (defaults to installDir)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Treat agent and API install failures as errors
    #[arg(long)]
    pub strict: bool,
}
