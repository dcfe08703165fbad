//! OAuth application record lifecycle tests.
//!
//! Exercises the full path a registration record takes through a provider:
//! construction, pre-save stamping, validation, redirect matching,
//! sanitization before exposure, and the wire round trip a store performs.

use std::collections::HashMap;

use oauth_apps::oauth::serialization::{
    oauth_app_from_json, oauth_app_list_from_json, oauth_app_list_to_json, oauth_app_map_from_json,
    oauth_app_map_to_json, oauth_app_to_json,
};
use oauth_apps::oauth::types::{APP_ID_LENGTH, new_app_id};
use oauth_apps::{OAuthApp, ValidationError};

fn registration_request() -> OAuthApp {
    OAuthApp {
        creator_id: new_app_id(),
        name: "Continuous Deployment Bot".to_string(),
        description: "Deploys builds after review approval".to_string(),
        callback_urls: vec![
            "https://ci.example.com/oauth/complete".to_string(),
            "https://ci.example.com/oauth/complete2".to_string(),
        ],
        homepage: "https://ci.example.com".to_string(),
        icon_url: "https://ci.example.com/static/icon.png".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_full_record_lifecycle() {
    // A freshly built registration is incomplete until pre-save runs.
    let mut app = registration_request();
    assert!(matches!(app.validate(), Err(ValidationError::AppId)));

    app.pre_save();
    assert_eq!(app.id.len(), APP_ID_LENGTH);
    assert_eq!(app.client_secret.len(), APP_ID_LENGTH);
    assert_eq!(app.create_at, app.update_at);
    app.validate().unwrap();

    // An update restamps update_at and rotates the etag.
    let etag = app.etag();
    std::thread::sleep(std::time::Duration::from_millis(2));
    app.pre_update();
    assert!(app.update_at > app.create_at);
    assert_ne!(app.etag(), etag);

    // The authorize endpoint only honors whitelisted redirects, exactly.
    assert!(app.is_valid_redirect_url("https://ci.example.com/oauth/complete"));
    assert!(!app.is_valid_redirect_url("https://ci.example.com/oauth/complete/"));
    assert!(!app.is_valid_redirect_url("https://ci.example.com/oauth"));

    // Store round trip keeps every field, secret included.
    let stored = oauth_app_to_json(&app);
    let loaded = oauth_app_from_json(stored.as_bytes()).unwrap();
    assert_eq!(loaded, app);

    // Responses to non-owners are sanitized first.
    let mut public = loaded;
    public.sanitize();
    assert_eq!(public.client_secret, "");
    assert_eq!(public.id, app.id);
}

#[test]
fn test_map_and_list_round_trips() {
    let mut first = registration_request();
    first.pre_save();
    let mut second = registration_request();
    second.name = "Audit Exporter".to_string();
    second.pre_save();

    let mut by_id = HashMap::new();
    by_id.insert(first.id.clone(), first.clone());
    by_id.insert(second.id.clone(), second.clone());
    let decoded_map = oauth_app_map_from_json(oauth_app_map_to_json(&by_id).as_bytes()).unwrap();
    assert_eq!(decoded_map, by_id);

    let ordered = vec![first, second];
    let decoded_list =
        oauth_app_list_from_json(oauth_app_list_to_json(&ordered).as_bytes()).unwrap();
    assert_eq!(decoded_list, ordered);
}

#[test]
fn test_malformed_store_payloads_are_recoverable_misses() {
    assert!(oauth_app_from_json(&b"{\"id\": \"trunc"[..]).is_none());
    assert!(oauth_app_map_from_json(&b"[1, 2, 3]"[..]).is_none());
    assert!(oauth_app_list_from_json(&b"null trailing"[..]).is_none());
}

#[test]
fn test_validation_failures_identify_the_field() {
    let mut app = registration_request();
    app.pre_save();

    app.homepage = "ftp://ci.example.com".to_string();
    let error = app.validate().unwrap_err();
    assert_eq!(error.code(), "oauth.invalid.homepage");
    assert_eq!(error.field_context().get("app_id").unwrap(), &app.id);
}
