//! Resolved upstream credentials.

/// API key plus optional per-user profile key.
///
/// Resolved by the caller; nothing in the fetch path looks credentials up.
/// `Debug` output never includes the secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    profile_key: Option<String>,
}

impl Credentials {
    /// Credentials for the account owner (no profile key).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            profile_key: None,
        }
    }

    /// Act on behalf of a user profile.
    pub fn with_profile_key(mut self, profile_key: impl Into<String>) -> Self {
        self.profile_key = Some(profile_key.into());
        self
    }

    /// Bearer API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Per-user profile key, if any.
    pub fn profile_key(&self) -> Option<&str> {
        self.profile_key.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("profile_key", &self.profile_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
