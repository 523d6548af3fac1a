//! Connected-platform discovery from an upstream user profile.

use crate::{PlatformId, normalize};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A linked social account as listed in a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct DisplayName {
    /// Platform name as reported upstream (loose spelling)
    #[serde(default)]
    platform: Option<String>,
    /// Account display name
    #[serde(default)]
    display_name: Option<String>,
    /// Account handle
    #[serde(default)]
    username: Option<String>,
    /// Public profile URL
    #[serde(default)]
    profile_url: Option<String>,
}

/// The slice of an upstream user profile needed to find connected platforms.
///
/// Unknown fields are ignored so the full profile document can be fed in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Platforms with an active connection
    #[serde(default)]
    active_social_accounts: Option<Vec<String>>,
    /// Per-account details
    #[serde(default)]
    display_names: Option<Vec<DisplayName>>,
}

impl UserProfile {
    /// Create a profile from active account names alone.
    pub fn with_active_accounts<I, S>(accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_social_accounts: Some(accounts.into_iter().map(Into::into).collect()),
            display_names: None,
        }
    }

    /// Canonical identifiers of every connected platform.
    ///
    /// Active accounts come first, then platforms only listed under display
    /// names. Each name is normalized and duplicates are dropped, keeping the
    /// first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_core::UserProfile;
    ///
    /// let profile = UserProfile::with_active_accounts(["Instagram", "instagram", "GMB"]);
    /// let ids: Vec<String> = profile.connected_platforms().iter().map(|p| p.to_string()).collect();
    /// assert_eq!(ids, ["instagram", "gmb"]);
    /// ```
    pub fn connected_platforms(&self) -> Vec<PlatformId> {
        let active = self.active_social_accounts.iter().flatten().map(String::as_str);
        let listed = self
            .display_names
            .iter()
            .flatten()
            .filter_map(|account| account.platform.as_deref());

        let mut seen = HashSet::new();
        active
            .chain(listed)
            .map(normalize)
            .filter(|id| seen.insert(id.clone()))
            .collect()
    }
}
