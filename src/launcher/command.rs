//! Game command line composition
//!
//! ```text
//! <java> -Xmx4G -Xms1G -XX:+UnlockExperimentalVMOptions -XX:+UseG1GC
//!        -Djava.library.path=<install>/versions/<v>/natives
//!        -Dminecraft.launcher.brand=SledgeMC -Dminecraft.launcher.version=1.0.0
//!        -cp <classpath> sledgemc.dev.loader.SledgeBootstrap
//!        --version <v> --gameDir <install> --assetsDir <install>/assets
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::brand::{BOOTSTRAP_CLASS, BRAND, LAUNCHER_VERSION};
use crate::classpath::ClasspathSet;
use crate::error::Result;

/// Heap and GC flags passed to every launch
pub const JVM_FLAGS: [&str; 4] = [
    "-Xmx4G",
    "-Xms1G",
    "-XX:+UnlockExperimentalVMOptions",
    "-XX:+UseG1GC",
];

/// A fully composed, not yet spawned game invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
}

impl LaunchCommand {
    /// Compose the invocation for `version` from an assembled classpath
    pub fn compose(
        java: &Path,
        install_dir: &Path,
        version: &str,
        classpath: &ClasspathSet,
    ) -> Result<Self> {
        let natives = install_dir.join("versions").join(version).join("natives");
        let assets = install_dir.join("assets");

        let mut args: Vec<OsString> = JVM_FLAGS.iter().map(OsString::from).collect();
        args.push(prefixed("-Djava.library.path=", natives.as_os_str()));
        args.push(format!("-Dminecraft.launcher.brand={BRAND}").into());
        args.push(format!("-Dminecraft.launcher.version={LAUNCHER_VERSION}").into());
        args.push("-cp".into());
        args.push(classpath.join()?);
        args.push(BOOTSTRAP_CLASS.into());
        args.push("--version".into());
        args.push(version.into());
        args.push("--gameDir".into());
        args.push(install_dir.as_os_str().to_owned());
        args.push("--assetsDir".into());
        args.push(assets.into_os_string());

        Ok(Self {
            program: java.to_path_buf(),
            args,
            working_dir: install_dir.to_path_buf(),
        })
    }

    /// `std::process::Command` with program, args and working directory set
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(&self.working_dir);
        command
    }

    /// Space-joined command line for logging
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn prefixed(prefix: &str, value: &OsStr) -> OsString {
    let mut arg = OsString::from(prefix);
    arg.push(value);
    arg
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> LaunchCommand {
        let mut classpath = ClasspathSet::new();
        classpath.insert("/mc/versions/1.21.4/1.21.4.jar");
        classpath.prepend("/cache/sledge-loader-1.21.4.jar");
        LaunchCommand::compose(
            Path::new("/jdk/bin/java"),
            Path::new("/mc"),
            "1.21.4",
            &classpath,
        )
        .unwrap()
    }

    fn args(command: &LaunchCommand) -> Vec<String> {
        command
            .args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_argument_order() {
        let command = sample();
        let args = args(&command);
        let natives = Path::new("/mc").join("versions/1.21.4/natives");
        let assets = Path::new("/mc").join("assets");
        let separator = if cfg!(windows) { ";" } else { ":" };

        assert_eq!(
            args,
            vec![
                "-Xmx4G".to_string(),
                "-Xms1G".to_string(),
                "-XX:+UnlockExperimentalVMOptions".to_string(),
                "-XX:+UseG1GC".to_string(),
                format!("-Djava.library.path={}", natives.display()),
                "-Dminecraft.launcher.brand=SledgeMC".to_string(),
                "-Dminecraft.launcher.version=1.0.0".to_string(),
                "-cp".to_string(),
                format!(
                    "/cache/sledge-loader-1.21.4.jar{separator}/mc/versions/1.21.4/1.21.4.jar"
                ),
                "sledgemc.dev.loader.SledgeBootstrap".to_string(),
                "--version".to_string(),
                "1.21.4".to_string(),
                "--gameDir".to_string(),
                "/mc".to_string(),
                "--assetsDir".to_string(),
                assets.display().to_string(),
            ]
        );
    }

    #[test]
    fn test_program_and_working_dir() {
        let command = sample();
        assert_eq!(command.program, PathBuf::from("/jdk/bin/java"));
        assert_eq!(command.working_dir, PathBuf::from("/mc"));

        let std_command = command.to_command();
        assert_eq!(std_command.get_program(), OsStr::new("/jdk/bin/java"));
        assert_eq!(std_command.get_current_dir(), Some(Path::new("/mc")));
        assert_eq!(std_command.get_args().count(), command.args.len());
    }

    #[test]
    fn test_display_starts_with_program() {
        let line = sample().display();
        assert!(line.starts_with("/jdk/bin/java -Xmx4G -Xms1G"));
        assert!(line.ends_with("--assetsDir /mc/assets") || cfg!(windows));
    }
}
