//! OAuth application registration record and its lifecycle operations.
//!
//! Defines the record an identity provider keeps for a registered third-party
//! application, plus validation, id/secret generation, redirect matching,
//! sanitization, and cache fingerprinting.

use base64::prelude::*;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use ulid::Ulid;
use url::Url;

use crate::errors::ValidationError;

/// Length of generated identifiers (`id`, `creator_id`)
pub const APP_ID_LENGTH: usize = 26;
/// Maximum byte length of `client_secret`
pub const CLIENT_SECRET_MAX_LENGTH: usize = 128;
/// Maximum byte length of `name`
pub const NAME_MAX_LENGTH: usize = 64;
/// Maximum code-point count of `description`
pub const DESCRIPTION_MAX_LENGTH: usize = 512;
/// Maximum byte length of `icon_url`
pub const ICON_URL_MAX_LENGTH: usize = 512;
/// Maximum byte length of the rendered `callback_urls` list
pub const CALLBACK_URLS_MAX_LENGTH: usize = 1024;
/// Maximum byte length of `homepage`
pub const HOMEPAGE_MAX_LENGTH: usize = 256;

/// Authentication flows a consuming provider drives through a registered app.
///
/// Serialized as `snake_case` strings since HTTP layers pass these as query
/// parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthAction {
    Signup,
    Login,
    EmailToSso,
    SsoToEmail,
}

impl OAuthAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthAction::Signup => "signup",
            OAuthAction::Login => "login",
            OAuthAction::EmailToSso => "email_to_sso",
            OAuthAction::SsoToEmail => "sso_to_email",
        }
    }
}

/// A registered OAuth application.
///
/// Field names double as the canonical wire names, so the serde derives
/// produce the storage/transport contract directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthApp {
    /// Unique 26-character identifier, immutable once assigned
    pub id: String,
    /// Identifier of the user who registered the app
    pub creator_id: String,
    /// Creation time in epoch milliseconds, stamped once by [`pre_save`](OAuthApp::pre_save)
    pub create_at: i64,
    /// Last modification time in epoch milliseconds
    pub update_at: i64,
    /// Shared secret presented by the app during token exchange; sensitive
    pub client_secret: String,
    /// Display name shown on consent screens
    pub name: String,
    /// Free-text description of the app
    pub description: String,
    /// Optional icon shown on consent screens
    pub icon_url: String,
    /// Whitelist of redirect destinations, matched exactly
    pub callback_urls: Vec<String>,
    /// Homepage of the app
    pub homepage: String,
    /// Trusted apps may skip the consent screen in consuming flows
    pub is_trusted: bool,
}

impl OAuthApp {
    /// Validate the record, returning the first failing check.
    ///
    /// Checks run in a fixed order so error reporting is deterministic; a
    /// record failing several checks always reports the earliest one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.len() != APP_ID_LENGTH {
            return Err(ValidationError::AppId);
        }

        if self.create_at == 0 {
            return Err(ValidationError::CreateAt {
                app_id: self.id.clone(),
            });
        }

        if self.update_at == 0 {
            return Err(ValidationError::UpdateAt {
                app_id: self.id.clone(),
            });
        }

        if self.creator_id.len() != APP_ID_LENGTH {
            return Err(ValidationError::CreatorId {
                app_id: self.id.clone(),
            });
        }

        if self.client_secret.is_empty() || self.client_secret.len() > CLIENT_SECRET_MAX_LENGTH {
            return Err(ValidationError::ClientSecret {
                app_id: self.id.clone(),
            });
        }

        if self.name.is_empty() || self.name.len() > NAME_MAX_LENGTH {
            return Err(ValidationError::Name {
                app_id: self.id.clone(),
            });
        }

        if self.callback_urls.is_empty()
            || rendered_list_len(&self.callback_urls) > CALLBACK_URLS_MAX_LENGTH
        {
            return Err(ValidationError::CallbackUrls {
                app_id: self.id.clone(),
            });
        }

        for callback in &self.callback_urls {
            if !is_valid_http_url(callback) {
                return Err(ValidationError::CallbackUrlEntry {
                    url: callback.clone(),
                });
            }
        }

        if self.homepage.is_empty()
            || self.homepage.len() > HOMEPAGE_MAX_LENGTH
            || !is_valid_http_url(&self.homepage)
        {
            return Err(ValidationError::Homepage {
                app_id: self.id.clone(),
            });
        }

        if self.description.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(ValidationError::Description {
                app_id: self.id.clone(),
            });
        }

        if !self.icon_url.is_empty()
            && (self.icon_url.len() > ICON_URL_MAX_LENGTH || !is_valid_http_url(&self.icon_url))
        {
            return Err(ValidationError::IconUrl {
                app_id: self.id.clone(),
            });
        }

        Ok(())
    }

    /// Prepare the record for its first save.
    ///
    /// Assigns `id` and `client_secret` when empty and stamps both timestamps
    /// to now. Re-invoking restamps the timestamps but never regenerates an
    /// already-populated id or secret.
    pub fn pre_save(&mut self) {
        if self.id.is_empty() {
            self.id = new_app_id();
        }

        if self.client_secret.is_empty() {
            self.client_secret = new_app_id();
        }

        self.create_at = Utc::now().timestamp_millis();
        self.update_at = self.create_at;
    }

    /// Prepare the record for a persisted mutation by restamping `update_at`.
    pub fn pre_update(&mut self) {
        self.update_at = Utc::now().timestamp_millis();
    }

    /// Cache-validation token derived from `(id, update_at)`.
    ///
    /// Deterministic: two records with the same id and update time yield the
    /// same token, and any restamp of `update_at` changes it.
    pub fn etag(&self) -> String {
        compute_etag(&self.id, self.update_at)
    }

    /// Remove private data before the record crosses a trust boundary.
    ///
    /// Must run before the record is exposed to anyone other than its
    /// administrative owner. Idempotent.
    pub fn sanitize(&mut self) {
        self.client_secret = String::new();
    }

    /// Whether `url` is an approved redirect destination.
    ///
    /// Exact string match against the callback whitelist. No normalization,
    /// prefix matching, or case folding: loosening this would open a
    /// redirect bypass.
    pub fn is_valid_redirect_url(&self, url: &str) -> bool {
        self.callback_urls.iter().any(|u| u == url)
    }
}

/// Generate a 26-character identifier.
///
/// Also mints `client_secret` values, so the underlying generator must stay
/// unpredictable, not merely unique.
pub fn new_app_id() -> String {
    Ulid::new().to_string()
}

/// Compute a cache-validation token from an app id and update timestamp.
pub fn compute_etag(id: &str, update_at: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(id.as_bytes());
    hasher.update(b".");
    hasher.update(update_at.to_string().as_bytes());
    BASE64_URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Whether `raw` is an absolute http(s) URL with a non-empty host.
pub fn is_valid_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

// Byte length of the whitelist rendered as "[url1 url2 ...]", the canonical
// form the 1024-byte budget is measured against.
fn rendered_list_len(urls: &[String]) -> usize {
    let separators = urls.len().saturating_sub(1);
    urls.iter().map(String::len).sum::<usize>() + separators + 2
}
