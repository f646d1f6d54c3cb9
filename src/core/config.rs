//! Viewer configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then environment variables, then command-line flags (applied by the
//! binaries). Credentials are only checked once every layer has been applied.

use crate::core::error::{Result, StatsError};
use crate::core::types::{Game, SteamId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "kf2-stats.toml";

/// Environment variable holding the Steam Web API key
pub const ENV_API_KEY: &str = "STEAM_API_KEY";

/// Environment variable holding the 64-bit Steam ID
pub const ENV_STEAM_ID: &str = "STEAM_ID";

pub const DEFAULT_API_BASE_URL: &str = "https://api.steampowered.com";

/// Configuration for fetching and displaying stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Steam Web API key (issued at steamcommunity.com/dev/apikey)
    pub api_key: Option<String>,

    /// 64-bit Steam ID of the player, kept as text until validated
    pub steam_id: Option<String>,

    /// Which game's stats to classify
    pub game: Game,

    /// Base URL of the Steam Web API
    ///
    /// Overridable so the client can be pointed at a proxy or a local stub.
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Show the raw stat listing alongside the dashboard
    pub show_debug: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            steam_id: None,
            game: Game::default(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            timeout_secs: 15,
            show_debug: false,
        }
    }
}

/// Validated credentials ready to hand to the API client
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub steam_id: SteamId,
}

impl ViewerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the config file layer
    ///
    /// An explicit path must exist. Without one, `kf2-stats.toml` in the
    /// working directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                fallback
            }
        };

        tracing::debug!(path = %path.display(), "Loading config file");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Overlay values from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(id) = lookup(ENV_STEAM_ID).filter(|v| !v.trim().is_empty()) {
            self.steam_id = Some(id);
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration and extract the credentials
    pub fn credentials(&self) -> Result<Credentials> {
        if self.timeout_secs == 0 {
            return Err(StatsError::Config("timeout_secs must be greater than zero".into()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(StatsError::Config("api_base_url must not be empty".into()));
        }

        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(StatsError::MissingCredentials("a Steam API key is required"))?;
        let steam_id = self
            .steam_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(StatsError::MissingCredentials("a 64-bit Steam ID is required"))?
            .parse::<SteamId>()?;

        Ok(Credentials {
            api_key: api_key.to_string(),
            steam_id,
        })
    }
}
