//! Remote JSONv2 API helpers
//!
//! URL shaping and envelope parsing for the instance's query-parameter API.
//! The file's URL directive carries a `sys_id` record query; the API wants
//! it rewritten into `sysparm_*` form with an action and protocol marker
//! appended. Responses wrap records in `{"records": [{...}]}`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::SyncError;

#[derive(Deserialize)]
struct Envelope {
    records: Vec<serde_json::Map<String, Value>>,
}

/// URL for the pre-push read check of the current server copy
pub fn read_url(url: &str) -> String {
    format!("{}&JSONv2", url.replace("sys_id", "sysparm_query=sys_id"))
}

/// URL for pushing an updated field value
pub fn update_url(url: &str) -> String {
    format!("{}&sysparm_action=update&JSONv2", url).replace("sys_id", "sysparm_query=sys_id")
}

/// URL for fetching the server copy during a pull
pub fn fetch_url(url: &str) -> String {
    format!("{}&sysparm_action=get&JSONv2", url).replace("sys_id", "sysparm_sys_id")
}

/// JSON body for an update: a single-field object
pub fn update_body(field: &str, content: &str) -> String {
    let mut record = serde_json::Map::new();
    record.insert(field.to_string(), Value::String(content.to_string()));
    Value::Object(record).to_string()
}

/// Extract the named field from a single-record envelope
pub fn field_value(body: &[u8], field: &str) -> Result<String, SyncError> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    let record = envelope
        .records
        .first()
        .ok_or_else(|| SyncError::MalformedResponse("no records in response".to_string()))?;

    match record.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(SyncError::MalformedResponse(format!(
            "field '{}' is not a string",
            field
        ))),
        None => Err(SyncError::MalformedResponse(format!(
            "field '{}' missing from record",
            field
        ))),
    }
}
