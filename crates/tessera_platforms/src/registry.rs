//! Lookup table from platform identifier to mapper and display metadata.

use crate::MetricMapper;
use crate::mappers::{
    BlueskyMapper, FacebookMapper, GenericMapper, GmbMapper, InstagramMapper, LinkedinMapper,
    PinterestMapper, RedditMapper, SnapchatMapper, ThreadsMapper, TiktokMapper, TwitterMapper,
    YoutubeMapper,
};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use tessera_core::{KnownPlatform, PlatformId, PlatformSummary, RawPlatformPayload};
use tracing::debug;

/// Icon shown for platforms without a registry entry.
pub const FALLBACK_ICON: &str = "📱";
/// Text colour class for platforms without a registry entry.
pub const FALLBACK_COLOR: &str = "text-gray-600";

static STANDARD: LazyLock<PlatformRegistry> = LazyLock::new(PlatformRegistry::standard);

/// One registered platform.
#[derive(Debug, derive_getters::Getters)]
pub struct PlatformEntry {
    /// Platform identifier
    platform: KnownPlatform,
    /// Human-readable platform name
    #[getter(skip)]
    display_name: &'static str,
    /// Emoji icon
    #[getter(skip)]
    icon: &'static str,
    /// Text colour class used by dashboards
    #[getter(skip)]
    color: &'static str,
    /// Payload mapper
    #[getter(skip)]
    mapper: Box<dyn MetricMapper>,
}

impl PlatformEntry {
    /// Create an entry.
    pub fn new(
        platform: KnownPlatform,
        display_name: &'static str,
        icon: &'static str,
        color: &'static str,
        mapper: impl MetricMapper + 'static,
    ) -> Self {
        Self {
            platform,
            display_name,
            icon,
            color,
            mapper: Box::new(mapper),
        }
    }

    /// Human-readable platform name.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Emoji icon.
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// Text colour class used by dashboards.
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// The mapper for this platform.
    pub fn mapper(&self) -> &dyn MetricMapper {
        self.mapper.as_ref()
    }
}

/// Registry of every platform with a dedicated mapper.
///
/// Immutable once built. [`PlatformRegistry::global`] holds the standard set
/// and is safe to share across threads.
#[derive(Debug, Default)]
pub struct PlatformRegistry {
    entries: BTreeMap<KnownPlatform, PlatformEntry>,
}

impl PlatformRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard registry covering every [`KnownPlatform`].
    pub fn standard() -> Self {
        use KnownPlatform::*;

        let mut registry = Self::new();
        registry.register(PlatformEntry::new(
            Facebook,
            "Facebook",
            "📘",
            "text-blue-600",
            FacebookMapper,
        ));
        registry.register(PlatformEntry::new(
            Instagram,
            "Instagram",
            "📷",
            "text-pink-600",
            InstagramMapper,
        ));
        registry.register(PlatformEntry::new(
            Twitter,
            "Twitter",
            "🐦",
            "text-blue-400",
            TwitterMapper,
        ));
        registry.register(PlatformEntry::new(
            Linkedin,
            "LinkedIn",
            "💼",
            "text-blue-700",
            LinkedinMapper,
        ));
        registry.register(PlatformEntry::new(
            Tiktok,
            "TikTok",
            "🎵",
            "text-black",
            TiktokMapper,
        ));
        registry.register(PlatformEntry::new(
            Youtube,
            "YouTube",
            "📺",
            "text-red-600",
            YoutubeMapper,
        ));
        registry.register(PlatformEntry::new(
            Pinterest,
            "Pinterest",
            "📌",
            "text-red-500",
            PinterestMapper,
        ));
        registry.register(PlatformEntry::new(
            Reddit,
            "Reddit",
            "🤖",
            "text-orange-500",
            RedditMapper,
        ));
        registry.register(PlatformEntry::new(
            Snapchat,
            "Snapchat",
            "👻",
            "text-yellow-400",
            SnapchatMapper,
        ));
        registry.register(PlatformEntry::new(
            Threads,
            "Threads",
            "🧵",
            "text-gray-800",
            ThreadsMapper,
        ));
        registry.register(PlatformEntry::new(
            Bluesky,
            "Bluesky",
            "☁️",
            "text-blue-500",
            BlueskyMapper,
        ));
        registry.register(PlatformEntry::new(
            Gmb,
            "Google My Business",
            "🏢",
            "text-green-600",
            GmbMapper,
        ));
        registry
    }

    /// Shared standard registry.
    pub fn global() -> &'static PlatformRegistry {
        &STANDARD
    }

    /// Add or replace an entry.
    pub fn register(&mut self, entry: PlatformEntry) {
        self.entries.insert(entry.platform, entry);
    }

    /// Entry for a platform, if registered.
    pub fn entry(&self, platform: &PlatformId) -> Option<&PlatformEntry> {
        platform.known().and_then(|known| self.entries.get(&known))
    }

    /// Registered entries in identifier order.
    pub fn entries(&self) -> impl Iterator<Item = &PlatformEntry> {
        self.entries.values()
    }

    /// Dedicated mapper for a platform. `None` for unknown platforms.
    pub fn mapper_for(&self, platform: &PlatformId) -> Option<&dyn MetricMapper> {
        self.entry(platform).map(PlatformEntry::mapper)
    }

    /// Human-readable name, falling back to the identifier itself.
    pub fn display_name(&self, platform: &PlatformId) -> String {
        match self.entry(platform) {
            Some(entry) => entry.display_name.to_string(),
            None => platform.to_string(),
        }
    }

    /// Emoji icon for a platform.
    pub fn icon(&self, platform: &PlatformId) -> &'static str {
        self.entry(platform).map_or(FALLBACK_ICON, |entry| entry.icon)
    }

    /// Text colour class for a platform.
    pub fn color(&self, platform: &PlatformId) -> &'static str {
        self.entry(platform).map_or(FALLBACK_COLOR, |entry| entry.color)
    }

    /// Identifiers of every registered platform.
    pub fn all_known_identifiers(&self) -> BTreeSet<PlatformId> {
        self.entries.keys().copied().map(PlatformId::Known).collect()
    }

    /// Map a raw payload with the platform's mapper.
    ///
    /// Platforms without a dedicated mapper go through [`GenericMapper`] and
    /// come back zeroed.
    pub fn map(
        &self,
        platform: &PlatformId,
        raw: &RawPlatformPayload,
        at: DateTime<Utc>,
    ) -> PlatformSummary {
        match self.mapper_for(platform) {
            Some(mapper) => mapper.map_at(raw, at),
            None => {
                debug!(platform = %platform, "No dedicated mapper, using generic");
                GenericMapper::new(platform.clone()).map_at(raw, at)
            }
        }
    }
}
