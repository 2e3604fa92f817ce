//! Launch command implementation
//!
//! Unlike the library launcher, the command waits for the game to exit so
//! that every output line reaches the terminal.

use crate::cli::LaunchArgs;
use crate::commands::helpers::Context;
use crate::error::Result;
use crate::launcher::{LaunchRequest, Launcher, java::java_executable};
use crate::sink::LogSink;

/// Run launch command
pub fn run(mut context: Context, args: LaunchArgs) -> Result<()> {
    let version = args
        .version
        .unwrap_or_else(|| context.config.last_version.clone());
    let install_dir = args
        .dir
        .unwrap_or_else(|| context.config.install_dir.clone());
    // A different game directory implies its own mods directory
    let mods_dir = args.mods_dir.unwrap_or_else(|| {
        if install_dir == context.config.install_dir {
            context.config.mods_dir.clone()
        } else {
            install_dir.join("mods")
        }
    });
    let java = java_executable(args.java.as_deref().or(context.config.java_path.as_deref()));

    let cache = context.asset_cache()?;
    let request = LaunchRequest {
        install_dir,
        mods_dir,
        version,
    };
    let process = Launcher::new(&cache, java).launch(&request, &LogSink::stdout())?;

    context.config.last_version = request.version;
    context.config.install_dir = request.install_dir;
    context.config.mods_dir = request.mods_dir;
    context.save_config();

    let (status, lines) = process.wait()?;
    tracing::debug!(lines, "game output drained");
    match status.code() {
        Some(code) => println!("Minecraft exited with code {code}"),
        None => println!("Minecraft terminated by signal"),
    }

    Ok(())
}
