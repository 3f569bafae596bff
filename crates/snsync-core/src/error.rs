//! Sync error handling
//!
//! A single typed error covers every way a sync operation can stop short.
//! The first two kinds mean "this file is not managed here" and callers are
//! expected to treat them as silent no-ops; the rest abort the operation
//! with a user-facing message. A conflict is not an error - it is a decision
//! point handled by the orchestrator.

use thiserror::Error;

use crate::settings::SettingsError;
use crate::transport::TransportError;

/// Errors that can occur during a push or pull
#[derive(Error, Debug)]
pub enum SyncError {
    /// Buffer carries no URL directive; not a synced file
    #[error("not a recognized remote file (no URL directive)")]
    NotRecognized,

    /// URL directive present but no instance name could be derived from it
    #[error("no instance name found in URL '{0}'")]
    NoInstance(String),

    /// No inline credential and nothing stored for the instance
    #[error("no credentials for instance '{0}'; add an __authentication directive")]
    AuthMissing(String),

    /// HTTP transport failure (status error, network error, timeout)
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Server response body is not valid JSON
    #[error("server response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Server response parsed but does not have the expected shape
    #[error("malformed server response: {0}")]
    MalformedResponse(String),

    /// Settings store could not be read or written
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SyncError::AuthMissing("dev12345".to_string());
        let msg = err.to_string();
        assert!(msg.contains("dev12345"));
        assert!(msg.contains("__authentication"));
    }

    #[test]
    fn test_transport_error_passthrough() {
        let err = SyncError::from(TransportError::Http(403));
        assert!(err.to_string().contains("403"));
    }
}
