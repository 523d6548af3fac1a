//! Tests for registry display metadata.

use tessera_core::{KnownPlatform, normalize};
use tessera_platforms::mappers::RedditMapper;
use tessera_platforms::{FALLBACK_COLOR, FALLBACK_ICON, PlatformEntry, PlatformRegistry};

#[test]
fn test_standard_display_table() {
    let expected = [
        ("facebook", "Facebook", "📘", "text-blue-600"),
        ("instagram", "Instagram", "📷", "text-pink-600"),
        ("twitter", "Twitter", "🐦", "text-blue-400"),
        ("linkedin", "LinkedIn", "💼", "text-blue-700"),
        ("tiktok", "TikTok", "🎵", "text-black"),
        ("youtube", "YouTube", "📺", "text-red-600"),
        ("pinterest", "Pinterest", "📌", "text-red-500"),
        ("reddit", "Reddit", "🤖", "text-orange-500"),
        ("snapchat", "Snapchat", "👻", "text-yellow-400"),
        ("threads", "Threads", "🧵", "text-gray-800"),
        ("bluesky", "Bluesky", "☁️", "text-blue-500"),
        ("gmb", "Google My Business", "🏢", "text-green-600"),
    ];

    let registry = PlatformRegistry::global();
    for (id, name, icon, color) in expected {
        let platform = normalize(id);
        assert_eq!(platform.to_string(), id);
        assert_eq!(registry.display_name(&platform), name, "{id}");
        assert_eq!(registry.icon(&platform), icon, "{id}");
        assert_eq!(registry.color(&platform), color, "{id}");
    }
    assert_eq!(registry.entries().count(), expected.len());
}

#[test]
fn test_unknown_platform_metadata_falls_back() {
    let registry = PlatformRegistry::global();
    let myspace = normalize("myspace");
    assert_eq!(registry.display_name(&myspace), "unknown:myspace");
    assert_eq!(registry.icon(&myspace), FALLBACK_ICON);
    assert_eq!(registry.color(&myspace), FALLBACK_COLOR);
    assert!(registry.mapper_for(&myspace).is_none());
}

#[test]
fn test_register_replaces_entry() {
    let mut registry = PlatformRegistry::new();
    for name in ["Reddit", "reddit.com"] {
        registry.register(PlatformEntry::new(
            KnownPlatform::Reddit,
            name,
            "🤖",
            "text-orange-500",
            RedditMapper,
        ));
    }
    assert_eq!(registry.entries().count(), 1);
    assert_eq!(
        registry.display_name(&KnownPlatform::Reddit.into()),
        "reddit.com"
    );
}
