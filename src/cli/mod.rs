//! CLI definitions using clap derive API
//!
//! One submodule per command's argument types:
//! - install: Profile installation
//! - launch: Game launch
//! - config: Configuration file
//! - cache: Asset cache
//! - completions: Shell completions

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod cache;
pub mod completions;
pub mod config;
pub mod install;
pub mod launch;

pub use cache::{CacheArgs, CacheSubcommand};
pub use completions::CompletionsArgs;
pub use config::{ConfigArgs, ConfigSubcommand};
pub use install::InstallArgs;
pub use launch::LaunchArgs;

/// Sledge - SledgeMC launcher
///
/// Install SledgeMC profiles and launch Minecraft with the SledgeMC loader.
#[derive(Parser, Debug)]
#[command(
    name = "sledge",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Launcher and profile installer for SledgeMC",
    long_about = "Sledge downloads the SledgeMC loader, agent and API, installs a SledgeMC \
                  profile next to an existing vanilla Minecraft version and launches the game \
                  with the loader on the classpath.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  sledge install 1.21.4                 \x1b[90m# Install the SledgeMC-1.21.4 profile\x1b[0m\n   \
                  sledge launch 1.21.4                  \x1b[90m# Launch Minecraft 1.21.4 with SledgeMC\x1b[0m\n   \
                  sledge launch --dir ~/games/mc        \x1b[90m# Launch from another game directory\x1b[0m\n   \
                  sledge config set lastVersion 1.20.1  \x1b[90m# Change the default version\x1b[0m\n   \
                  sledge cache list                     \x1b[90m# List downloaded jars\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "SLEDGE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Asset cache directory (defaults to ~/.sledgemc/cache)
    #[arg(long, global = true, env = "SLEDGE_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Artifact repository base URL
    #[arg(long, global = true, env = "SLEDGE_REPOSITORY_URL", value_name = "URL")]
    pub repository: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a SledgeMC profile for a Minecraft version
    Install(InstallArgs),

    /// Launch Minecraft with the SledgeMC loader
    Launch(LaunchArgs),

    /// Show or change the configuration
    Config(ConfigArgs),

    /// Inspect the asset cache
    #[command(name = "cache")]
    Cache(CacheArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
