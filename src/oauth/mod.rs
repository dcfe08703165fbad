//! OAuth application registration domain.
//!
//! Owns the record an identity provider keeps per registered third-party
//! application: validation, id/secret generation, lifecycle stamping,
//! redirect whitelist enforcement, sanitization, and wire serialization.

pub mod serialization;
pub mod types;

// Re-export frequently used items from each module
pub use serialization::{
    oauth_app_from_json, oauth_app_list_from_json, oauth_app_list_to_json, oauth_app_map_from_json,
    oauth_app_map_to_json, oauth_app_to_json,
};
pub use types::{OAuthAction, OAuthApp, compute_etag, is_valid_http_url, new_app_id};
