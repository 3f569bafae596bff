//! Command handlers

pub mod config;
pub mod pull;
pub mod push;

use anyhow::Result;
use tracing::info;

use snsync_core::SyncError;

/// Map a sync error to its user-facing behavior.
///
/// A file without a URL directive, or with a URL that yields no instance
/// name, is simply not managed by snsync: those cases log a line and the
/// command succeeds without doing anything. Every other error aborts the
/// command.
pub(crate) fn report(err: SyncError) -> Result<()> {
    match err {
        SyncError::NotRecognized => {
            info!("no URL directive found; not a managed file");
            Ok(())
        }
        SyncError::NoInstance(url) => {
            info!("no instance name found in URL '{}'; nothing to do", url);
            Ok(())
        }
        err @ (SyncError::AuthMissing(_)
        | SyncError::Transport(_)
        | SyncError::Json(_)
        | SyncError::MalformedResponse(_)
        | SyncError::Settings(_)) => Err(err.into()),
    }
}
