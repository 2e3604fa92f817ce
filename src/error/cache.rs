//! Cache errors

use super::SledgeError;

/// Creates a fetch failed error
pub fn fetch_failed(
    resource: impl Into<String>,
    url: impl Into<String>,
    reason: impl Into<String>,
) -> SledgeError {
    SledgeError::FetchFailed {
        resource: resource.into(),
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> SledgeError {
    SledgeError::CacheOperationFailed {
        message: message.into(),
    }
}
