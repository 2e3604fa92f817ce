//! Launch errors

use std::path::Path;

use super::SledgeError;

/// Creates an install directory not found error
pub fn install_dir_not_found(path: &Path) -> SledgeError {
    SledgeError::InstallDirNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a version jar not found error naming the missing jar
pub fn version_jar_not_found(path: &Path, version: &str) -> SledgeError {
    SledgeError::VersionJarNotFound {
        path: path.display().to_string(),
        version: version.to_string(),
    }
}

/// Creates an invalid version error
pub fn invalid_version(version: &str, reason: impl Into<String>) -> SledgeError {
    SledgeError::InvalidVersion {
        version: version.to_string(),
        reason: reason.into(),
    }
}

/// Creates a spawn failure error
pub fn spawn_failed(program: &Path, reason: impl ToString) -> SledgeError {
    SledgeError::LaunchFailed {
        program: program.display().to_string(),
        reason: reason.to_string(),
    }
}
