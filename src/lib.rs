//! OAuth application registration records.
//!
//! Provides the registration record an identity provider stores for each
//! third-party application, with validation, lifecycle stamping,
//! sanitization, redirect whitelist matching, and canonical JSON
//! serialization. Persistence and the OAuth protocol flows themselves live
//! in the consuming store and HTTP layers.

pub mod errors;
pub mod oauth;

pub use errors::ValidationError;
pub use oauth::types::{OAuthAction, OAuthApp};
