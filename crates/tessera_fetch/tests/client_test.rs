//! Tests for the Ayrshare request and response shapes.

use serde_json::json;
use tessera_core::{FetchErrorCode, KnownPlatform, normalize};
use tessera_fetch::{
    AnalyticsRequest, AyrshareClient, ClientError, ClientErrorKind, Credentials, QueryOptions,
    platform_analytics,
};

#[test]
fn test_request_body_shape() {
    let options = QueryOptions::quarterly(2).with_extended(true);
    let body = serde_json::to_value(AnalyticsRequest::new(
        &KnownPlatform::Instagram.into(),
        &options,
    ))
    .unwrap();
    assert_eq!(
        body,
        json!({ "platforms": ["instagram"], "quarters": 2, "instagramDetails": true })
    );
}

#[test]
fn test_request_body_sixty_days() {
    let body = serde_json::to_value(AnalyticsRequest::new(
        &normalize("GMB"),
        &QueryOptions::sixty_days(),
    ))
    .unwrap();
    assert_eq!(body, json!({ "platforms": ["gmb"], "period60Days": true }));
}

#[test]
fn test_endpoint_trims_trailing_slash() {
    let client = AyrshareClient::new("http://localhost:8080/api/");
    assert_eq!(client.endpoint(), "http://localhost:8080/api/analytics/social");
}

#[test]
fn test_platform_analytics_extracts_block() {
    let document = json!({
        "status": "success",
        "instagram": { "analytics": { "likeCount": 116 }, "lastUpdated": "2025-01-01" }
    });
    let payload = platform_analytics(&document, &KnownPlatform::Instagram.into()).unwrap();
    assert_eq!(payload.as_value(), &json!({ "likeCount": 116 }));
}

#[test]
fn test_platform_analytics_upstream_error() {
    let document = json!({
        "facebook": { "status": "error", "message": "Token expired" }
    });
    let err = platform_analytics(&document, &KnownPlatform::Facebook.into()).unwrap_err();
    assert_eq!(
        err.kind(),
        &ClientErrorKind::Upstream("Token expired".to_string())
    );
}

#[test]
fn test_platform_analytics_missing_entry() {
    let err = platform_analytics(&json!({}), &KnownPlatform::Reddit.into()).unwrap_err();
    assert!(matches!(err.kind(), ClientErrorKind::Decode(_)));
}

#[test]
fn test_decode_becomes_invalid_payload() {
    let err = ClientError::new(ClientErrorKind::Decode("missing 'tiktok'".into()));
    let fetch = err.into_fetch_error(KnownPlatform::Tiktok.into());
    assert_eq!(*fetch.code(), FetchErrorCode::InvalidPayload);
    assert!(fetch.message().contains("missing 'tiktok'"));
}

#[test]
fn test_client_error_records_caller_location() {
    let err = ClientError::new(ClientErrorKind::Transport("connection refused".into()));
    let text = err.to_string();
    assert!(text.contains("connection refused"));
    assert!(text.contains("client_test.rs"));
}

#[test]
fn test_debug_redacts_secrets() {
    let creds = Credentials::new("sk-live-123").with_profile_key("prof-456");
    let debug = format!("{:?}", creds);
    assert!(!debug.contains("sk-live-123"));
    assert!(!debug.contains("prof-456"));
    assert!(debug.contains("REDACTED"));
    assert_eq!(creds.profile_key(), Some("prof-456"));
}
