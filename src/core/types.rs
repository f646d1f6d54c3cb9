//! Core type definitions used throughout the codebase

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::StatsError;

/// Namespace prefix the Steam stats endpoint puts in front of every stat ID
pub const STAT_KEY_PREFIX: &str = "1_";

/// Numeric identifier assigned by Steam to a single stat counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatId(pub u32);

impl StatId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Key under which this stat appears in the API response (e.g. `1_200`)
    pub fn key(&self) -> String {
        format!("{}{}", STAT_KEY_PREFIX, self.0)
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 64-bit Steam account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SteamId(pub u64);

impl FromStr for SteamId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(SteamId)
            .map_err(|_| StatsError::Config(format!("Steam ID must be a 64-bit number, got '{}'", s)))
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Steam application identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(pub u32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Games the viewer knows how to classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Game {
    #[default]
    #[value(name = "kf2")]
    #[serde(rename = "kf2")]
    KillingFloor2,
}

impl Game {
    pub fn name(&self) -> &'static str {
        match self {
            Game::KillingFloor2 => "Killing Floor 2",
        }
    }

    pub fn app_id(&self) -> AppId {
        match self {
            Game::KillingFloor2 => AppId(232090),
        }
    }
}
