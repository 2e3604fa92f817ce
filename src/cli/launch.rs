use clap::Parser;
use std::path::PathBuf;

/// Arguments for the launch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Launch the last used version:\n    sledge launch\n\n\
                   Launch a specific version:\n    sledge launch 1.21.4\n\n\
                   Use a specific Java runtime:\n    sledge launch 1.21.4 --java /opt/jdk-21/bin/java")]
pub struct LaunchArgs {
    /// Minecraft version to launch (defaults to lastVersion)
    pub version: Option<String>,

    /// Minecraft directory (defaults to installDir)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Mods directory (defaults to modsDir)
    #[arg(long, value_name = "DIR")]
    pub mods_dir: Option<PathBuf>,

    /// Java executable (defaults to javaPath, then JAVA_HOME, then PATH)
    #[arg(long, value_name = "FILE")]
    pub java: Option<PathBuf>,
}
