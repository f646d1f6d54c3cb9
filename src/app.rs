//! Shared bootstrapping for the viewer binaries
//!
//! Both dashboards parse the same flags, layer the same config, and fetch
//! the same snapshot; only their rendering differs.

use crate::core::config::ViewerConfig;
use crate::core::error::Result;
use crate::core::types::Game;
use crate::steam::{PlayerSnapshot, SteamClient};
use clap::Args;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Flags common to every viewer binary
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Steam Web API key (overrides STEAM_API_KEY and the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// 64-bit Steam ID (overrides STEAM_ID and the config file)
    #[arg(long)]
    pub steam_id: Option<String>,

    /// Game to show stats for
    #[arg(long, value_enum)]
    pub game: Option<Game>,

    /// Path to a TOML config file (default: ./kf2-stats.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the Steam Web API
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Show every raw stat with its schema name
    #[arg(long)]
    pub debug: bool,

    /// Verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl CommonArgs {
    /// Defaults, then config file, then environment, then these flags
    pub fn resolve_config(&self) -> Result<ViewerConfig> {
        let config = ViewerConfig::load(self.config.as_deref())?.with_env();
        Ok(self.apply(config))
    }

    fn apply(&self, mut config: ViewerConfig) -> ViewerConfig {
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(id) = &self.steam_id {
            config.steam_id = Some(id.clone());
        }
        if let Some(game) = self.game {
            config.game = game;
        }
        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if self.debug {
            config.show_debug = true;
        }
        config
    }
}

/// Where log output goes
pub enum LogTarget<'a> {
    Stderr,
    /// Keeps the terminal free for a full-screen UI
    File(&'a Path),
}

/// Initialize tracing; `RUST_LOG` overrides the default filter
pub fn init_logging(target: LogTarget<'_>, verbose: bool) -> Result<()> {
    let default_level = if verbose { "kf2_stats=debug" } else { "kf2_stats=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}

/// Validate credentials and fetch a snapshot on a fresh runtime
pub fn fetch_blocking(config: &ViewerConfig) -> Result<PlayerSnapshot> {
    let credentials = config.credentials()?;
    let client = SteamClient::from_config(config, &credentials)?;

    let rt = Runtime::new()?;
    rt.block_on(client.fetch_snapshot(credentials.steam_id, config.game.app_id()))
}
