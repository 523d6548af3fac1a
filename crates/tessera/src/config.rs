//! Engine configuration loaded from TOML.
//!
//! ```toml
//! [upstream]
//! base_url = "https://api.ayrshare.com/api"
//! timeout_secs = 10
//! api_key_env = "AYRSHARE_API_KEY"
//!
//! [query]
//! quarters = 2
//! include_extended = true
//! ```
//!
//! Secrets never live in the file. The API key is read from the environment
//! variable named by `api_key_env`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tessera_error::{ConfigError, ConfigErrorKind, TesseraResult};
use tessera_fetch::{AyrshareClient, Credentials, DEFAULT_BASE_URL, QueryOptions};
use tracing::debug;

/// Environment variable consulted for the per-user profile key.
pub const PROFILE_KEY_ENV: &str = "AYRSHARE_PROFILE_KEY";

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upstream API settings
    #[serde(default)]
    pub upstream: UpstreamSettings,
    /// Default query options
    #[serde(default)]
    pub query: QueryOptions,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or the TOML
    /// is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> TesseraResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })?;
        let config = Self::parse(&contents)?;
        debug!(path = %path.display(), base_url = %config.upstream.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TOML is invalid.
    pub fn parse(contents: &str) -> TesseraResult<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        Ok(config)
    }

    /// Per-platform fetch timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_secs)
    }

    /// The configured `[query]` options with command-line overrides applied.
    ///
    /// Each override touches only its own field, so `quarters` and `daily`
    /// combine and unrelated settings such as `user_id` survive.
    pub fn query_with(&self, quarters: Option<u8>, daily: bool, extended: bool) -> QueryOptions {
        let mut options = self.query.clone();
        if let Some(quarters) = quarters {
            options = options.with_quarters(quarters);
        }
        if daily {
            options = options.with_daily(true);
        }
        if extended {
            options = options.with_extended(true);
        }
        options
    }

    /// Resolve credentials from the environment.
    ///
    /// `profile_key` wins over the [`PROFILE_KEY_ENV`] variable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key variable is unset or empty.
    pub fn credentials(&self, profile_key: Option<String>) -> TesseraResult<Credentials> {
        let var = &self.upstream.api_key_env;
        let api_key = std::env::var(var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingEnv(var.clone())))?;

        let credentials = Credentials::new(api_key);
        let profile_key = profile_key.or_else(|| std::env::var(PROFILE_KEY_ENV).ok());
        Ok(match profile_key.filter(|key| !key.trim().is_empty()) {
            Some(key) => credentials.with_profile_key(key),
            None => credentials,
        })
    }

    /// Build the upstream client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the connection pool cannot be created.
    pub fn client(&self) -> TesseraResult<AyrshareClient> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tessera/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::HttpClient(e.to_string())))?;
        Ok(AyrshareClient::with_client(client, &self.upstream.base_url))
    }
}

/// Upstream API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// API root, without the `/analytics/social` path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-platform timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_api_key_env() -> String {
    "AYRSHARE_API_KEY".to_string()
}
