//! Platform identifiers and the identifier normalizer.
//!
//! Loose platform names ("Google My Business", "google-my-business", "GMB")
//! collapse onto one [`PlatformId`]. Anything unrecognised becomes
//! [`PlatformId::Unknown`] rather than an error, so a stray account type in a
//! user profile never stops the pipeline.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Prefix used when rendering unrecognised identifiers.
pub const UNKNOWN_PREFIX: &str = "unknown:";

/// Social platforms with a dedicated metric mapper.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum KnownPlatform {
    /// Facebook pages
    Facebook,
    /// Instagram business accounts
    Instagram,
    /// Twitter / X
    Twitter,
    /// LinkedIn
    Linkedin,
    /// TikTok
    Tiktok,
    /// YouTube channels
    Youtube,
    /// Pinterest
    Pinterest,
    /// Reddit
    Reddit,
    /// Snapchat
    Snapchat,
    /// Threads
    Threads,
    /// Bluesky
    Bluesky,
    /// Google My Business
    Gmb,
}

/// Canonical platform identifier.
///
/// Serializes as its canonical string: `"instagram"`, `"gmb"`,
/// `"unknown:myspace"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PlatformId {
    /// A platform with a registered mapper.
    Known(KnownPlatform),
    /// An unrecognised platform, holding its canonicalized name.
    Unknown(String),
}

impl PlatformId {
    /// Returns the known platform, if any.
    pub fn known(&self) -> Option<KnownPlatform> {
        match self {
            PlatformId::Known(platform) => Some(*platform),
            PlatformId::Unknown(_) => None,
        }
    }

    /// True for synthetic `unknown:*` identifiers.
    pub fn is_unknown(&self) -> bool {
        matches!(self, PlatformId::Unknown(_))
    }
}

impl From<KnownPlatform> for PlatformId {
    fn from(platform: KnownPlatform) -> Self {
        PlatformId::Known(platform)
    }
}

impl std::fmt::Display for PlatformId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformId::Known(platform) => write!(f, "{}", platform),
            PlatformId::Unknown(name) => write!(f, "{}{}", UNKNOWN_PREFIX, name),
        }
    }
}

impl From<PlatformId> for String {
    fn from(id: PlatformId) -> Self {
        id.to_string()
    }
}

impl From<String> for PlatformId {
    fn from(raw: String) -> Self {
        parse_identifier(&raw)
    }
}

impl FromStr for PlatformId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_identifier(s))
    }
}

/// Lowercases `raw` and strips every character outside `[a-z0-9]`.
///
/// # Examples
///
/// ```
/// use tessera_core::canonicalize;
///
/// assert_eq!(canonicalize("Google My Business"), "googlemybusiness");
/// assert_eq!(canonicalize("--!!--"), "");
/// ```
pub fn canonicalize(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Maps an arbitrary platform name onto its canonical identifier.
///
/// Never fails. Names that match no alias become `unknown:<canonicalized>`.
/// Feeding the canonical form of a name back in yields the same identifier.
///
/// # Examples
///
/// ```
/// use tessera_core::{KnownPlatform, PlatformId, normalize};
///
/// assert_eq!(normalize("Google My Business"), PlatformId::Known(KnownPlatform::Gmb));
/// assert_eq!(normalize("myspace").to_string(), "unknown:myspace");
/// ```
pub fn normalize(raw: &str) -> PlatformId {
    let canonical = canonicalize(raw);
    match lookup_alias(&canonical) {
        Some(platform) => PlatformId::Known(platform),
        None => {
            tracing::trace!(raw, canonical = %canonical, "Unrecognised platform name");
            PlatformId::Unknown(canonical)
        }
    }
}

/// Parses a rendered identifier, accepting the `unknown:<name>` form.
///
/// Unlike [`normalize`], this inverts `Display`: for every identifier `id`,
/// `parse_identifier(&id.to_string()) == id`.
pub fn parse_identifier(raw: &str) -> PlatformId {
    match strip_unknown_prefix(raw) {
        Some(rest) => {
            let canonical = canonicalize(rest);
            match lookup_alias(&canonical) {
                Some(platform) => PlatformId::Known(platform),
                None => PlatformId::Unknown(canonical),
            }
        }
        None => normalize(raw),
    }
}

fn strip_unknown_prefix(raw: &str) -> Option<&str> {
    let head = raw.get(..UNKNOWN_PREFIX.len())?;
    if head.eq_ignore_ascii_case(UNKNOWN_PREFIX) {
        raw.get(UNKNOWN_PREFIX.len()..)
    } else {
        None
    }
}

fn lookup_alias(canonical: &str) -> Option<KnownPlatform> {
    match canonical {
        "x" | "xtwitter" | "twitterx" => Some(KnownPlatform::Twitter),
        "googlemybusiness" | "googlebusiness" | "googlebusinessprofile" => {
            Some(KnownPlatform::Gmb)
        }
        "fb" => Some(KnownPlatform::Facebook),
        "ig" => Some(KnownPlatform::Instagram),
        "yt" => Some(KnownPlatform::Youtube),
        other => KnownPlatform::from_str(other).ok(),
    }
}
