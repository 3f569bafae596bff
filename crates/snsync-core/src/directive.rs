//! Buffer directive parsing
//!
//! Synced files describe their remote target through up to three directives
//! embedded anywhere in the text, usually inside comments:
//!
//! ```text
//! // __fileURL=https://dev12345.service.example/api?sys_id=abc
//! // __fieldName=script
//! // __authentication=user:password
//! ```
//!
//! Each directive is matched independently by a first-occurrence scan, so
//! their order in the file does not matter. A file without a URL directive
//! is not a synced file at all.

use std::sync::OnceLock;

use regex::Regex;

/// Field synced when no `__fieldName` directive is present.
pub const DEFAULT_FIELD: &str = "script";

/// Sentinel written over an inline credential once it has been captured.
pub const STORED_SENTINEL: &str = "STORED";

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"__fileURL[\W=]*([a-zA-Z0-9:/.\-_?&=]*)").expect("static regex")
    })
}

fn field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"__fieldName[\W=]*([a-zA-Z0-9_]*)").expect("static regex"))
}

fn credential_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Wide punctuation charset so passwords with symbols survive the scan.
    RE.get_or_init(|| {
        Regex::new(r"__authentication[\W=]*([a-zA-Z0-9:~`/!@#$%^&*()_\-;,.]*)")
            .expect("static regex")
    })
}

/// First-occurrence capture of a directive's value, empty captures dropped.
fn captured(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty())
}

/// The directives extracted from a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directives {
    /// Full query URL of the remote record, if present.
    pub url: Option<String>,
    /// Record attribute holding the synced text.
    pub field_name: String,
    /// Inline plaintext credential, absent once captured (`STORED`).
    pub credential: Option<String>,
}

impl Directives {
    /// Parse all directives out of `text`.
    pub fn parse(text: &str) -> Self {
        Self {
            url: captured(url_re(), text),
            field_name: captured(field_re(), text)
                .unwrap_or_else(|| DEFAULT_FIELD.to_string()),
            credential: captured(credential_re(), text).filter(|c| c != STORED_SENTINEL),
        }
    }
}

/// Derive the instance name from a URL: the host label between `//` and the
/// first `.`.
pub fn instance_name(url: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"//([a-zA-Z0-9]*)\.").expect("static regex"));
    captured(re, url)
}

/// The buffer with all directive lines removed.
///
/// This is the content that belongs to the remote field; the directives
/// themselves are local bookkeeping and never travel to the server.
pub fn field_content(text: &str) -> String {
    let kept: Vec<&str> = text
        .split('\n')
        .filter(|line| !is_directive_line(line))
        .collect();
    kept.join("\n")
}

fn is_directive_line(line: &str) -> bool {
    line.contains("__fileURL")
        || line.contains("__fieldName")
        || line.contains("__authentication")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUFFER: &str = "\
// __fileURL=https://dev12345.service.example/api?sys_id=abc
// __fieldName=payload
// __authentication=admin:s3cret!
alert(1);";

    #[test]
    fn test_parse_all_directives() {
        let directives = Directives::parse(BUFFER);
        assert_eq!(
            directives.url.as_deref(),
            Some("https://dev12345.service.example/api?sys_id=abc")
        );
        assert_eq!(directives.field_name, "payload");
        assert_eq!(directives.credential.as_deref(), Some("admin:s3cret!"));
    }

    #[test]
    fn test_missing_url() {
        let directives = Directives::parse("just some text");
        assert!(directives.url.is_none());
    }

    #[test]
    fn test_field_name_defaults() {
        let directives = Directives::parse("__fileURL=https://x.example/api?sys_id=1");
        assert_eq!(directives.field_name, DEFAULT_FIELD);

        // Marker with an empty capture also falls back
        let directives = Directives::parse("code\n__fieldName=");
        assert_eq!(directives.field_name, DEFAULT_FIELD);
    }

    #[test]
    fn test_stored_sentinel_not_captured() {
        let directives = Directives::parse("__authentication=STORED");
        assert!(directives.credential.is_none());
    }

    #[test]
    fn test_credential_with_symbols() {
        let directives = Directives::parse("__authentication=user:p@$$w0rd!#%");
        assert_eq!(directives.credential.as_deref(), Some("user:p@$$w0rd!#%"));
    }

    #[test]
    fn test_directive_order_independent() {
        let reordered = "alert(1);\n__fieldName=payload\n__fileURL=https://a.b/api?sys_id=1";
        let directives = Directives::parse(reordered);
        assert_eq!(directives.url.as_deref(), Some("https://a.b/api?sys_id=1"));
        assert_eq!(directives.field_name, "payload");
    }

    #[test]
    fn test_instance_name() {
        assert_eq!(
            instance_name("https://dev12345.service.example/api?sys_id=abc").as_deref(),
            Some("dev12345")
        );
        assert!(instance_name("not a url").is_none());
        assert!(instance_name("https://.example/api").is_none());
    }

    #[test]
    fn test_field_content_strips_directive_lines() {
        assert_eq!(field_content(BUFFER), "alert(1);");
    }

    #[test]
    fn test_field_content_preserves_rest() {
        let text = "__fileURL=https://a.b/api?sys_id=1\nline one\nline two\n";
        assert_eq!(field_content(text), "line one\nline two\n");
    }

    #[test]
    fn test_field_content_without_directives() {
        assert_eq!(field_content("plain\ntext"), "plain\ntext");
    }
}
