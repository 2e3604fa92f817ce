//! Error types and handling for Sledge
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//!
//! This module is organized into sub-modules by error domain:
//! - [`cache`]: Asset download and cache errors
//! - [`config`]: Configuration document errors
//! - [`fs`]: File system errors
//! - [`install`]: Profile installation errors
//! - [`launch`]: Launch precondition and spawn errors

pub mod cache;
pub mod config;
pub mod fs;
pub mod install;
pub mod launch;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Sledge operations
#[derive(Error, Diagnostic, Debug)]
pub enum SledgeError {
    // Missing install state
    #[error("Minecraft directory not found: {path}")]
    #[diagnostic(
        code(sledge::launch::install_dir_not_found),
        help("Pass --dir or run 'sledge config set installDir <path>'")
    )]
    InstallDirNotFound { path: String },

    #[error("Version JAR not found: {path}. Please run vanilla Minecraft {version} first.")]
    #[diagnostic(code(sledge::launch::version_jar_not_found))]
    VersionJarNotFound { path: String, version: String },

    #[error("Vanilla version JSON not found: {path}. Please download {version} first.")]
    #[diagnostic(code(sledge::install::vanilla_descriptor_not_found))]
    VanillaDescriptorNotFound { path: String, version: String },

    #[error("Invalid Minecraft version '{version}': {reason}")]
    #[diagnostic(
        code(sledge::version::invalid),
        help("Use a plain version id such as 1.21.4")
    )]
    InvalidVersion { version: String, reason: String },

    // Cache errors
    #[error("Failed to fetch {resource} from {url}: {reason}")]
    #[diagnostic(
        code(sledge::cache::fetch_failed),
        help("Check your network connection and the repository URL")
    )]
    FetchFailed {
        resource: String,
        url: String,
        reason: String,
    },

    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(sledge::cache::operation_failed))]
    CacheOperationFailed { message: String },

    // Installation errors
    #[error("Failed to install loader for {version}: {reason}")]
    #[diagnostic(code(sledge::install::loader_failed))]
    LoaderInstallFailed { version: String, reason: String },

    #[error("Failed to install {step}: {reason}")]
    #[diagnostic(
        code(sledge::install::auxiliary_failed),
        help("Retry without --strict to finish the profile without this library")
    )]
    AuxiliaryInstallFailed { step: String, reason: String },

    #[error("Failed to parse version descriptor: {path}: {reason}")]
    #[diagnostic(code(sledge::install::descriptor_parse_failed))]
    DescriptorParseFailed { path: String, reason: String },

    #[error("Invalid version descriptor {path}: {message}")]
    #[diagnostic(code(sledge::install::descriptor_invalid))]
    InvalidDescriptor { path: String, message: String },

    // Launch errors
    #[error("Failed to start {program}: {reason}")]
    #[diagnostic(
        code(sledge::launch::spawn_failed),
        help("Check that Java is installed, or pass --java <path>")
    )]
    LaunchFailed { program: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(sledge::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(sledge::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to write configuration file: {path}: {reason}")]
    #[diagnostic(code(sledge::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(sledge::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(sledge::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(sledge::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(sledge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(sledge::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(sledge::cli::invalid_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    InvalidShell { shell: String },
}

impl SledgeError {
    /// True for errors caused by a required path being absent.
    #[allow(dead_code)]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SledgeError::InstallDirNotFound { .. }
                | SledgeError::VersionJarNotFound { .. }
                | SledgeError::VanillaDescriptorNotFound { .. }
                | SledgeError::FileNotFound { .. }
        )
    }
}

impl From<std::io::Error> for SledgeError {
    fn from(err: std::io::Error) -> Self {
        SledgeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SledgeError {
    fn from(err: serde_json::Error) -> Self {
        SledgeError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SledgeError>;
