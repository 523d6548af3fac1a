//! Cross-mapper behaviour of the standard registry.

use chrono::{TimeZone, Utc};
use serde_json::json;
use strum::IntoEnumIterator;
use tessera_core::{KnownPlatform, PlatformId, RawPlatformPayload, normalize};
use tessera_platforms::{GenericMapper, MetricMapper, PlatformRegistry};

#[test]
fn test_every_known_platform_is_registered() {
    let registry = PlatformRegistry::global();
    for platform in KnownPlatform::iter() {
        let id = PlatformId::Known(platform);
        let mapper = registry
            .mapper_for(&id)
            .unwrap_or_else(|| panic!("{platform} has no mapper"));
        assert_eq!(mapper.platform(), id);
    }
    assert_eq!(
        registry.all_known_identifiers().len(),
        KnownPlatform::iter().count()
    );
}

#[test]
fn test_empty_payload_maps_to_zeros() {
    let registry = PlatformRegistry::global();
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    for id in registry.all_known_identifiers() {
        let summary = registry.map(&id, &RawPlatformPayload::empty(), at);
        assert!(summary.is_zeroed(), "{id} not zeroed");
        assert_eq!(summary.platform(), &id);
        assert_eq!(*summary.last_updated(), at);
    }
}

#[test]
fn test_wrong_typed_fields_map_to_zeros() {
    let registry = PlatformRegistry::global();
    let raw = RawPlatformPayload::from(json!({
        "likeCount": "many",
        "viewsCount": null,
        "totalKarma": [1, 2],
        "board": "not an object",
        "views": -5
    }));
    for id in registry.all_known_identifiers() {
        let summary = registry.map(&id, &raw, Utc::now());
        assert!(summary.is_zeroed(), "{id} not zeroed");
    }
}

#[test]
fn test_instagram_counts() {
    let raw = RawPlatformPayload::from(json!({
        "viewsCount": 123212,
        "likeCount": 116,
        "commentsCount": 6
    }));
    let summary = PlatformRegistry::global().map(&normalize("Instagram"), &raw, Utc::now());

    assert_eq!(*summary.total_views(), 123_212);
    assert_eq!(*summary.total_likes(), 116);
    assert_eq!(*summary.total_comments(), 6);
    assert_eq!(*summary.total_engagement(), 122);
    assert_eq!(*summary.average_views(), 123_212);
    assert_eq!(*summary.average_likes(), 116);
    assert_eq!(*summary.average_comments(), 6);
    assert_eq!(*summary.average_engagement(), 122);
}

#[test]
fn test_unknown_platform_uses_generic_mapper() {
    let myspace = normalize("myspace");
    let raw = RawPlatformPayload::from(json!({ "likeCount": 50, "views": 10 }));
    let summary = PlatformRegistry::global().map(&myspace, &raw, Utc::now());
    assert!(summary.is_zeroed());
    assert_eq!(summary.platform().to_string(), "unknown:myspace");

    let generic = GenericMapper::new(myspace.clone());
    assert_eq!(generic.platform(), myspace);
}
