//! Sync orchestration
//!
//! Wires directive parsing, credential resolution, conflict checking and
//! transport into the two user-facing operations: push (the save hook) and
//! pull (the load hook and the explicit sync command). Both mutate the
//! buffer in place - push through the credential scrub, pull through the
//! reload - and leave writing the buffer back to disk to the caller.

use tracing::info;

use crate::api;
use crate::credentials;
use crate::directive::{self, Directives};
use crate::error::SyncError;
use crate::fingerprint::{fingerprint, normalize};
use crate::resolver::{self, PushCheck};
use crate::settings::Settings;
use crate::transport::Transport;

/// Binary user confirmation
///
/// The CLI implements this over the terminal; tests script the answers.
pub trait Confirm {
    /// Present `message` and return `true` to proceed, `false` to cancel
    fn ok_cancel(&self, message: &str) -> bool;
}

/// Result of a push operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// Content uploaded and baseline recorded
    Pushed {
        /// True when this overwrote a diverged server copy
        overwrote_conflict: bool,
    },
    /// User declined to overwrite a diverged server copy; nothing written
    Declined,
}

/// Result of a pull operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullOutcome {
    /// Buffer replaced with the server copy
    Replaced,
    /// Buffer already matches the server copy
    Unchanged,
    /// Server copy differs but the user declined the reload
    Declined,
}

/// Extract the endpoint URL and instance name from the buffer.
///
/// A missing URL directive means the file is simply not managed here; a URL
/// whose host yields no instance name is a distinct failure.
fn endpoint(buffer: &str) -> Result<(String, String), SyncError> {
    let directives = Directives::parse(buffer);
    let url = directives.url.ok_or(SyncError::NotRecognized)?;
    let instance =
        directive::instance_name(&url).ok_or_else(|| SyncError::NoInstance(url.clone()))?;
    Ok((url, instance))
}

/// Push the buffer's field content to the remote record.
///
/// Runs the conflict check first (see [`resolver::check`]); a conflict asks
/// `confirm` whether to overwrite the server copy. The baseline is recorded
/// only after a successful write.
pub fn push(
    buffer: &mut String,
    transport: &dyn Transport,
    settings: &mut Settings,
    confirm: &dyn Confirm,
) -> Result<PushOutcome, SyncError> {
    let (url, instance) = endpoint(buffer)?;
    let token = credentials::resolve(buffer, &instance, settings)?;

    // Field content is captured only after credential resolution, so a raw
    // inline credential can never end up in the request body.
    let field = Directives::parse(buffer).field_name;
    let content = directive::field_content(buffer);

    let check = resolver::check(transport, settings, &url, &field, &token, &content)?;
    let overwrote_conflict = match check {
        PushCheck::FirstPush | PushCheck::Clean => false,
        PushCheck::Conflict { .. } => {
            let message = "This file is out of sync with the instance.\n\
                 Pushing will overwrite the server copy; cancelling leaves both sides untouched.";
            if !confirm.ok_cancel(message) {
                info!("push declined; server copy left untouched");
                return Ok(PushOutcome::Declined);
            }
            info!("overwrite confirmed; pushing over the diverged server copy");
            true
        }
    };

    resolver::commit(transport, settings, &url, &field, &token, &content)?;
    Ok(PushOutcome::Pushed { overwrote_conflict })
}

/// Pull the server copy into the buffer if it changed.
///
/// The server copy is compared (normalized) against the current buffer
/// content; a difference asks `confirm` before replacing the buffer. A
/// confirmed reload also records the loaded content as the new baseline so
/// the next push's conflict check agrees with what was just loaded.
pub fn pull(
    buffer: &mut String,
    transport: &dyn Transport,
    settings: &mut Settings,
    confirm: &dyn Confirm,
) -> Result<PullOutcome, SyncError> {
    let (url, instance) = endpoint(buffer)?;
    let token = credentials::resolve(buffer, &instance, settings)?;
    let field = Directives::parse(buffer).field_name;

    let body = transport.get(&api::fetch_url(&url), &token)?;
    let server_value = normalize(&api::field_value(&body, &field)?);

    if normalize(buffer) == server_value {
        info!("buffer matches server copy; nothing to reload");
        return Ok(PullOutcome::Unchanged);
    }

    if !confirm.ok_cancel("File has been updated on the server. Reload it?") {
        info!("reload declined; keeping local copy");
        return Ok(PullOutcome::Declined);
    }

    settings.set(&fingerprint(&url), &fingerprint(&server_value));
    settings.persist()?;
    *buffer = server_value;

    Ok(PullOutcome::Replaced)
}
