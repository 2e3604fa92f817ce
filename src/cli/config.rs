use clap::{Parser, Subcommand};

/// Arguments for config command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the configuration:\n    sledge config\n\n\
                  Print the configuration file location:\n    sledge config path\n\n\
                  Change the Minecraft directory:\n    sledge config set installDir ~/games/mc")]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigSubcommand>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Set a configuration value
    Set {
        /// installDir, modsDir, lastVersion, allocatedMemoryMb or javaPath
        key: String,
        value: String,
    },
}
