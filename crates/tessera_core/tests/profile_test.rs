//! Tests for connected-platform discovery.

use serde_json::json;
use tessera_core::{KnownPlatform, PlatformId, UserProfile};

#[test]
fn test_merges_active_and_display_names() {
    let profile: UserProfile = serde_json::from_value(json!({
        "refId": "abc",
        "activeSocialAccounts": ["facebook", "Twitter"],
        "displayNames": [
            { "platform": "twitter", "displayName": "acme" },
            { "platform": "google-my-business", "displayName": "Acme Shop" },
            { "displayName": "no platform here" }
        ]
    }))
    .unwrap();

    assert_eq!(
        profile.connected_platforms(),
        vec![
            PlatformId::Known(KnownPlatform::Facebook),
            PlatformId::Known(KnownPlatform::Twitter),
            PlatformId::Known(KnownPlatform::Gmb),
        ]
    );
}

#[test]
fn test_empty_profile_has_no_platforms() {
    let profile: UserProfile = serde_json::from_value(json!({})).unwrap();
    assert!(profile.connected_platforms().is_empty());
}
