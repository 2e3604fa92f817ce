//! File system errors

use std::path::Path;

use super::SledgeError;

/// Creates a file not found error
#[allow(dead_code)]
pub fn not_found(path: &Path) -> SledgeError {
    SledgeError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> SledgeError {
    SledgeError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> SledgeError {
    SledgeError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
