//! Tests for the offline command rows.

use chrono::{TimeZone, Utc};
use std::path::PathBuf;
use tessera::{
    KnownPlatform, PlatformId, PlatformRegistry, TesseraErrorKind, map_payload_file,
    normalize_names, platform_rows,
};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tessera-catalog-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_normalize_names_keeps_order_and_flags_unknown() {
    let rows = normalize_names(["Google My Business", "myspace", "GMB"]);
    let rendered: Vec<(&str, &str, bool)> = rows
        .iter()
        .map(|row| (row.input().as_str(), row.platform().as_str(), *row.known()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("Google My Business", "gmb", true),
            ("myspace", "unknown:myspace", false),
            ("GMB", "gmb", true),
        ]
    );
}

#[test]
fn test_platform_rows_cover_registry() {
    let rows = platform_rows(PlatformRegistry::global());
    assert_eq!(rows.len(), 12);

    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json["platform"], "facebook");
    assert_eq!(json["displayName"], "Facebook");
    assert_eq!(json["icon"], "📘");
    assert_eq!(json["color"], "text-blue-600");
}

#[test]
fn test_map_payload_file_uses_platform_mapper() {
    let path = scratch_file(
        "instagram.json",
        r#"{ "followersCount": 10, "mediaCount": 4, "likeCount": 7, "commentsCount": 2 }"#,
    );
    let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let summary = map_payload_file(PlatformRegistry::global(), "Instagram", &path, at).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(summary.platform(), &PlatformId::Known(KnownPlatform::Instagram));
    assert_eq!(*summary.total_posts(), 4);
    assert_eq!(*summary.last_updated(), at);
}

#[test]
fn test_map_payload_file_missing_is_document_error() {
    let err = map_payload_file(
        PlatformRegistry::global(),
        "reddit",
        std::path::Path::new("/nonexistent/tessera/reddit.json"),
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err.kind(), TesseraErrorKind::Document(_)));
}
