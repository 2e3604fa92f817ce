//! Configuration errors

use std::path::Path;

use super::SledgeError;

/// Creates a config read failed error
pub fn read_failed(path: &Path, reason: impl Into<String>) -> SledgeError {
    SledgeError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: &Path, reason: impl Into<String>) -> SledgeError {
    SledgeError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a config write failed error
pub fn write_failed(path: &Path, reason: impl Into<String>) -> SledgeError {
    SledgeError::ConfigWriteFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> SledgeError {
    SledgeError::ConfigInvalid {
        message: message.into(),
    }
}
