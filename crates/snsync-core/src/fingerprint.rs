//! Content fingerprinting
//!
//! Fingerprints are SHA-224 hex digests of normalized text. They are used
//! purely as opaque equality tokens: two texts count as "the same" for sync
//! purposes when their fingerprints match.

use sha2::{Digest, Sha224};

/// Normalize text for comparison by stripping carriage returns.
///
/// Remote instances store fields with platform-dependent line endings;
/// dropping `\r` keeps fingerprints stable across them.
pub fn normalize(text: &str) -> String {
    text.replace('\r', "")
}

/// Compute the fingerprint of a piece of text.
///
/// The input is normalized first, so `fingerprint("a\r\nb")` equals
/// `fingerprint("a\nb")`.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha224::new();
    hasher.update(normalize(text).as_bytes());
    format!("{:x}", hasher.finalize())
}
