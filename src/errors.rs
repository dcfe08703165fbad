//! Standardized error types following the `error-oauthapps-<domain>-<number>` format.

use std::collections::HashMap;
use thiserror::Error;

/// Validation errors for OAuth application registration records.
///
/// Exactly one variant per field check, so callers can match on the failing
/// field. `code` exposes a stable machine-readable identifier and
/// `field_context` the contextual values the error carries, keeping both
/// available without parsing the display message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// App id is not a 26-character identifier
    #[error("error-oauthapps-validate-1 app id must be 26 characters")]
    AppId,

    /// Creation timestamp was never stamped
    #[error("error-oauthapps-validate-2 create_at must be set: app_id={app_id}")]
    CreateAt { app_id: String },

    /// Update timestamp was never stamped
    #[error("error-oauthapps-validate-3 update_at must be set: app_id={app_id}")]
    UpdateAt { app_id: String },

    /// Creator id is not a 26-character identifier
    #[error("error-oauthapps-validate-4 creator_id must be 26 characters: app_id={app_id}")]
    CreatorId { app_id: String },

    /// Client secret is empty or over 128 bytes
    #[error("error-oauthapps-validate-5 client_secret must be 1-128 characters: app_id={app_id}")]
    ClientSecret { app_id: String },

    /// Name is empty or over 64 bytes
    #[error("error-oauthapps-validate-6 name must be 1-64 characters: app_id={app_id}")]
    Name { app_id: String },

    /// Callback list is empty or its rendered form exceeds 1024 bytes
    #[error("error-oauthapps-validate-7 callback_urls must be non-empty and at most 1024 characters: app_id={app_id}")]
    CallbackUrls { app_id: String },

    /// A callback entry is not an absolute http(s) URL
    #[error("error-oauthapps-validate-8 callback url is not a valid http(s) url: {url}")]
    CallbackUrlEntry { url: String },

    /// Homepage is empty, over 256 bytes, or not an absolute http(s) URL
    #[error("error-oauthapps-validate-9 homepage must be 1-256 characters and a valid http(s) url: app_id={app_id}")]
    Homepage { app_id: String },

    /// Description exceeds 512 Unicode code points
    #[error("error-oauthapps-validate-10 description must be at most 512 characters: app_id={app_id}")]
    Description { app_id: String },

    /// Icon URL is over 512 bytes or not an absolute http(s) URL
    #[error("error-oauthapps-validate-11 icon_url must be at most 512 characters and a valid http(s) url: app_id={app_id}")]
    IconUrl { app_id: String },
}

impl ValidationError {
    /// Stable machine-readable code identifying the failing field.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::AppId => "oauth.invalid.app_id",
            ValidationError::CreateAt { .. } => "oauth.invalid.create_at",
            ValidationError::UpdateAt { .. } => "oauth.invalid.update_at",
            ValidationError::CreatorId { .. } => "oauth.invalid.creator_id",
            ValidationError::ClientSecret { .. } => "oauth.invalid.client_secret",
            ValidationError::Name { .. } => "oauth.invalid.name",
            ValidationError::CallbackUrls { .. } | ValidationError::CallbackUrlEntry { .. } => {
                "oauth.invalid.callback"
            }
            ValidationError::Homepage { .. } => "oauth.invalid.homepage",
            ValidationError::Description { .. } => "oauth.invalid.description",
            ValidationError::IconUrl { .. } => "oauth.invalid.icon_url",
        }
    }

    /// Contextual values attached to the error, keyed by field name.
    ///
    /// Most checks attach the record's `app_id`. The id check itself carries
    /// nothing, and a failing callback entry carries the offending URL
    /// instead of the id.
    pub fn field_context(&self) -> HashMap<String, String> {
        let mut context = HashMap::new();
        match self {
            ValidationError::AppId => {}
            ValidationError::CallbackUrlEntry { url } => {
                context.insert("callback_url".to_string(), url.clone());
            }
            ValidationError::CreateAt { app_id }
            | ValidationError::UpdateAt { app_id }
            | ValidationError::CreatorId { app_id }
            | ValidationError::ClientSecret { app_id }
            | ValidationError::Name { app_id }
            | ValidationError::CallbackUrls { app_id }
            | ValidationError::Homepage { app_id }
            | ValidationError::Description { app_id }
            | ValidationError::IconUrl { app_id } => {
                context.insert("app_id".to_string(), app_id.clone());
            }
        }
        context
    }
}
