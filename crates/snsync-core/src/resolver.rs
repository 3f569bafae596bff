//! Conflict detection for push
//!
//! A push is judged by comparing three fingerprints: the stored baseline
//! (content at the last successful push), the server's current copy and the
//! pending local content.
//!
//! With no baseline the endpoint has never been pushed from here, so there
//! is nothing to compare against and the server is not consulted at all.
//! With a baseline the server copy is fetched: if it still matches the
//! baseline, or already matches the local content, the push is clean.
//! Anything else means someone changed the server copy since the last sync
//! and the caller has to decide between overwrite and abort.

use tracing::{debug, info};

use crate::api;
use crate::error::SyncError;
use crate::fingerprint::fingerprint;
use crate::settings::Settings;
use crate::transport::Transport;

/// Outcome of the pre-push check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushCheck {
    /// No baseline recorded for this endpoint; first-time save
    FirstPush,
    /// Server copy matches the baseline or the local content
    Clean,
    /// Server copy diverged from both baseline and local content
    Conflict {
        baseline_hash: String,
        server_hash: String,
        local_hash: String,
    },
}

impl PushCheck {
    /// Whether the push may proceed without user confirmation
    pub fn is_safe(&self) -> bool {
        !matches!(self, PushCheck::Conflict { .. })
    }
}

/// Run the three-way comparison for a pending push.
///
/// Contacts the server only when a baseline exists for the endpoint.
pub fn check(
    transport: &dyn Transport,
    settings: &Settings,
    url: &str,
    field: &str,
    token: &str,
    local_content: &str,
) -> Result<PushCheck, SyncError> {
    let endpoint_key = fingerprint(url);
    let Some(baseline_hash) = settings.get(&endpoint_key) else {
        info!("no previous sync recorded for this endpoint; skipping server check");
        return Ok(PushCheck::FirstPush);
    };

    debug!("baseline exists; fetching server copy for conflict check");
    let body = transport.get(&api::read_url(url), token)?;
    let server_value = api::field_value(&body, field)?;

    let server_hash = fingerprint(&server_value);
    let local_hash = fingerprint(local_content);

    if server_hash == baseline_hash || server_hash == local_hash {
        debug!("server copy matches last known sync; push is clean");
        Ok(PushCheck::Clean)
    } else {
        info!(
            "hash mismatch baseline={} server={} local={}",
            baseline_hash, server_hash, local_hash
        );
        Ok(PushCheck::Conflict {
            baseline_hash: baseline_hash.to_string(),
            server_hash,
            local_hash,
        })
    }
}

/// Write `local_content` to the endpoint's field and record the new baseline.
///
/// The baseline is updated only after the write succeeds, never
/// speculatively.
pub fn commit(
    transport: &dyn Transport,
    settings: &mut Settings,
    url: &str,
    field: &str,
    token: &str,
    local_content: &str,
) -> Result<(), SyncError> {
    let body = api::update_body(field, local_content);
    transport.put(&api::update_url(url), token, &body)?;

    settings.set(&fingerprint(url), &fingerprint(local_content));
    settings.persist()?;
    info!("field '{}' uploaded", field);
    Ok(())
}
