//! Credential resolution and storage
//!
//! Basic-Auth tokens live in the settings store keyed by instance name. The
//! first operation on a file carrying an inline `__authentication` directive
//! captures it: the base64 token is persisted and the plaintext in the
//! buffer is replaced with the `STORED` sentinel, so the secret never stays
//! on disk past first use.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::info;

use crate::directive::{Directives, STORED_SENTINEL};
use crate::error::SyncError;
use crate::settings::Settings;

/// Resolve the Basic-Auth token for `instance`.
///
/// An inline credential in the buffer wins: it is encoded, persisted under
/// `instance` and scrubbed from the buffer in place (callers must write the
/// buffer back to disk afterwards). Otherwise the stored token is returned.
/// With neither, the operation cannot proceed and no network call is made.
pub fn resolve(
    buffer: &mut String,
    instance: &str,
    settings: &mut Settings,
) -> Result<String, SyncError> {
    let directives = Directives::parse(buffer);

    if let Some(ref credential) = directives.credential {
        let token = STANDARD.encode(credential.as_bytes());
        settings.set(instance, &token);
        settings.persist()?;
        *buffer = buffer.replace(credential.as_str(), STORED_SENTINEL);
        info!("captured credentials for instance '{}'", instance);
        return Ok(token);
    }

    match settings.get(instance) {
        Some(token) => Ok(token.to_string()),
        None => Err(SyncError::AuthMissing(instance.to_string())),
    }
}
