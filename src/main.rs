//! Sledge - SledgeMC launcher
//!
//! Installs SledgeMC launch profiles into an existing Minecraft directory and
//! launches the game with the SledgeMC loader on the classpath.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod brand;
mod cache;
mod classpath;
mod cli;
mod commands;
mod config;
mod error;
mod launcher;
mod profile;
mod progress;
mod sink;
mod transform;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::helpers::Context;
use error::SledgeError;

/// Filter used when `RUST_LOG` is not set
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "warn,sledge=debug" } else { "warn" }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(e: &SledgeError) {
    eprintln!("Error: {e}");
    if let Some(help) = e.help() {
        eprintln!("Help: {help}");
    }
}

fn main() {
    let Cli {
        config,
        cache_dir,
        repository,
        verbose,
        command,
    } = Cli::parse();
    init_tracing(verbose);

    let context = || Context::new(config, cache_dir, repository);

    let result = match command {
        Commands::Install(args) => commands::install::run(context(), args),
        Commands::Launch(args) => commands::launch::run(context(), args),
        Commands::Config(args) => commands::config::run(context(), args),
        Commands::Cache(args) => commands::cache::run(&context(), args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}
