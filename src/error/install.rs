//! Profile installation errors

use std::path::Path;

use super::SledgeError;

pub fn vanilla_descriptor_not_found(path: &Path, version: &str) -> SledgeError {
    SledgeError::VanillaDescriptorNotFound {
        path: path.display().to_string(),
        version: version.to_string(),
    }
}

pub fn loader_failed(version: &str, reason: impl ToString) -> SledgeError {
    SledgeError::LoaderInstallFailed {
        version: version.to_string(),
        reason: reason.to_string(),
    }
}

pub fn auxiliary_failed(step: impl ToString, reason: impl Into<String>) -> SledgeError {
    SledgeError::AuxiliaryInstallFailed {
        step: step.to_string(),
        reason: reason.into(),
    }
}

pub fn descriptor_parse_failed(path: &Path, reason: impl ToString) -> SledgeError {
    SledgeError::DescriptorParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn invalid_descriptor(path: &Path, message: impl Into<String>) -> SledgeError {
    SledgeError::InvalidDescriptor {
        path: path.display().to_string(),
        message: message.into(),
    }
}
