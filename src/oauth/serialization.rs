//! Wire codecs for OAuth application records.
//!
//! Serialization is best-effort by contract: encoding degrades to an empty
//! string and decoding degrades to `None` on malformed input. Callers treat
//! absence as a recoverable miss, never a fault, so nothing here panics or
//! propagates errors.

use std::collections::HashMap;
use std::io::Read;

use crate::oauth::types::OAuthApp;

/// Serialize a single record to its canonical JSON form.
pub fn oauth_app_to_json(app: &OAuthApp) -> String {
    match serde_json::to_string(app) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = ?err, app_id = %app.id, "failed to serialize oauth app");
            String::new()
        }
    }
}

/// Decode a single record, yielding `None` on any parse or structural error.
pub fn oauth_app_from_json(data: impl Read) -> Option<OAuthApp> {
    serde_json::from_reader(data).ok()
}

/// Serialize an id-to-record mapping to its canonical JSON form.
pub fn oauth_app_map_to_json(apps: &HashMap<String, OAuthApp>) -> String {
    match serde_json::to_string(apps) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = ?err, "failed to serialize oauth app map");
            String::new()
        }
    }
}

/// Decode an id-to-record mapping, yielding `None` on malformed input.
pub fn oauth_app_map_from_json(data: impl Read) -> Option<HashMap<String, OAuthApp>> {
    serde_json::from_reader(data).ok()
}

/// Serialize an ordered sequence of records to its canonical JSON form.
pub fn oauth_app_list_to_json(apps: &[OAuthApp]) -> String {
    match serde_json::to_string(apps) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = ?err, "failed to serialize oauth app list");
            String::new()
        }
    }
}

/// Decode an ordered sequence of records, yielding `None` on malformed input.
pub fn oauth_app_list_from_json(data: impl Read) -> Option<Vec<OAuthApp>> {
    serde_json::from_reader(data).ok()
}
