//! Game launcher
//!
//! Launching runs strictly in order and aborts before spawning anything if a
//! precondition fails:
//!
//! 1. Validate the install directory and the vanilla version jar
//! 2. Create the mods directory if missing
//! 3. Ensure the loader for the version is cached
//! 4. Build the classpath and put the loader first
//! 5. Compose the command line
//! 6. Spawn the game with stdout and stderr merged into one pipe
//! 7. Relay output lines to the sink on a background thread
//!
//! The spawned game is not owned by the launcher: dropping a
//! [`GameProcess`] neither kills nor waits for it.

pub mod command;
pub mod java;
pub mod relay;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, ExitStatus, Stdio};

use crate::brand::{LOG_PREFIX, validate_version};
use crate::cache::AssetCache;
use crate::classpath::{self, version_jar_path};
use crate::error::{
    Result,
    fs::write_failed,
    launch::{install_dir_not_found, spawn_failed, version_jar_not_found},
};
use crate::sink::LogSink;

pub use command::LaunchCommand;
pub use relay::RelayHandle;

/// What to launch
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub install_dir: PathBuf,
    pub mods_dir: PathBuf,
    pub version: String,
}

/// Prepares and spawns the game
#[derive(Debug)]
pub struct Launcher<'a> {
    cache: &'a AssetCache,
    java: PathBuf,
}

impl<'a> Launcher<'a> {
    pub fn new(cache: &'a AssetCache, java: impl Into<PathBuf>) -> Self {
        Self {
            cache,
            java: java.into(),
        }
    }

    /// Run the precondition steps and compose the command without spawning
    pub fn prepare(&self, request: &LaunchRequest, sink: &LogSink) -> Result<LaunchCommand> {
        sink.line("Preparing launch...");

        // The game runs from the install directory, so nothing passed to it
        // may stay relative to ours
        let install_dir = &std::path::absolute(&request.install_dir)?;
        let java = resolve_program(&self.java)?;
        let version = request.version.as_str();
        validate_version(version)?;

        if !install_dir.is_dir() {
            return Err(install_dir_not_found(install_dir));
        }

        let version_jar = version_jar_path(install_dir, version);
        if !version_jar.is_file() {
            return Err(version_jar_not_found(&version_jar, version));
        }

        ensure_mods_dir(&request.mods_dir, sink)?;

        sink.line(format!("Version JAR: {}", version_jar.display()));
        let loader = self.cache.ensure_loader(version, sink)?;
        sink.line(format!("Loader JAR: {}", loader.display()));

        let mut classpath = classpath::build(install_dir, version)?;
        classpath.prepend(std::path::absolute(&loader)?);
        tracing::debug!(entries = classpath.len(), "classpath assembled");

        LaunchCommand::compose(&java, install_dir, version, &classpath)
    }

    /// Prepare, spawn and start relaying output to `sink`
    pub fn launch(&self, request: &LaunchRequest, sink: &LogSink) -> Result<GameProcess> {
        let command = self.prepare(request, sink)?;

        sink.line("Starting Minecraft...");
        sink.line(format!("Full Command: {}", command.display()));

        let process = spawn(&command, sink)?;
        sink.line(format!("Minecraft launched with PID: {}", process.pid()));
        Ok(process)
    }
}

/// Anchor a relative program path with a directory part to the current
/// directory. A bare name is left for `PATH` lookup.
fn resolve_program(program: &Path) -> Result<PathBuf> {
    if program.is_relative() && program.components().count() > 1 {
        Ok(std::path::absolute(program)?)
    } else {
        Ok(program.to_path_buf())
    }
}

fn ensure_mods_dir(mods_dir: &Path, sink: &LogSink) -> Result<()> {
    if mods_dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(mods_dir).map_err(|e| write_failed(mods_dir, e))?;
    sink.line(format!("{LOG_PREFIX} Created mods directory: {}", mods_dir.display()));
    Ok(())
}

/// Spawn `command` with stdout and stderr sharing one pipe
pub fn spawn(command: &LaunchCommand, sink: &LogSink) -> Result<GameProcess> {
    let fail = |e: std::io::Error| spawn_failed(&command.program, e);

    let (reader, writer) = std::io::pipe().map_err(fail)?;
    let writer_err = writer.try_clone().map_err(fail)?;

    let child = {
        let mut cmd = command.to_command();
        cmd.stdin(Stdio::null()).stdout(writer).stderr(writer_err);
        // `cmd` owns the parent's copies of the write end; dropping it at the
        // end of this block lets the reader see EOF once the game exits.
        cmd.spawn().map_err(fail)?
    };
    tracing::debug!(pid = child.id(), program = %command.program.display(), "game spawned");

    let relay = relay::spawn_relay(reader, sink.clone()).map_err(fail)?;

    Ok(GameProcess { child, relay })
}

/// A spawned game and its output relay
#[derive(Debug)]
pub struct GameProcess {
    child: Child,
    relay: RelayHandle,
}

impl GameProcess {
    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    /// Wait for the game to exit and the relay to drain its output
    pub fn wait(mut self) -> Result<(ExitStatus, usize)> {
        let status = self.child.wait()?;
        let lines = self.relay.join();
        Ok((status, lines))
    }

    /// Leave the game and its relay running unobserved
    #[allow(dead_code)]
    pub fn detach(self) {
        self.relay.detach();
    }
}
