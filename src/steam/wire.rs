//! Response bodies of the Steam Web API endpoints we call
//!
//! Steam omits fields freely (private profiles, games without a schema),
//! so nearly everything is optional or defaulted.

use crate::core::types::AppId;
use crate::stats::{AchievementMeta, AchievementRecord, GameSchema, RawStats};
use serde::Deserialize;

// ISteamUserStats/GetUserStatsForGame

#[derive(Debug, Deserialize)]
pub struct UserStatsResponse {
    #[serde(default)]
    pub playerstats: Option<PlayerStats>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerStats {
    #[serde(rename = "gameName", default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub stats: Option<Vec<StatEntry>>,
    #[serde(default)]
    pub achievements: Vec<AchievementEntry>,
}

#[derive(Debug, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub value: serde_json::Number,
}

#[derive(Debug, Deserialize)]
pub struct AchievementEntry {
    pub name: String,
    #[serde(default)]
    pub achieved: Option<u8>,
    #[serde(default)]
    pub unlocktime: Option<u64>,
}

/// Stats and unlocked achievements for one player
#[derive(Debug, Clone)]
pub struct PlayerStatsData {
    pub game_name: Option<String>,
    pub stats: RawStats,
    pub achievements: Vec<AchievementRecord>,
}

/// Counter value as an unsigned integer
///
/// Negative or fractional values cannot be experience or counts; they are
/// skipped and read as absent.
fn counter_value(value: &serde_json::Number) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0 && *v <= u64::MAX as f64)
            .map(|v| v as u64)
    })
}

impl PlayerStats {
    /// `None` when Steam returned no stat list at all
    pub fn into_data(self) -> Option<PlayerStatsData> {
        let entries = self.stats?;

        let stats = entries
            .into_iter()
            .filter_map(|entry| match counter_value(&entry.value) {
                Some(value) => Some((entry.name, value)),
                None => {
                    tracing::debug!(stat = %entry.name, value = %entry.value, "Skipping non-counter stat value");
                    None
                }
            })
            .collect();

        let achievements = self
            .achievements
            .into_iter()
            .filter(|a| a.achieved != Some(0))
            .map(|a| AchievementRecord {
                name: a.name,
                unlock_time: a.unlocktime,
            })
            .collect();

        Some(PlayerStatsData {
            game_name: self.game_name,
            stats,
            achievements,
        })
    }
}

// IPlayerService/GetOwnedGames

#[derive(Debug, Default, Deserialize)]
pub struct OwnedGamesResponse {
    #[serde(default)]
    pub response: OwnedGames,
}

#[derive(Debug, Default, Deserialize)]
pub struct OwnedGames {
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

#[derive(Debug, Deserialize)]
pub struct OwnedGame {
    pub appid: u32,
    #[serde(default)]
    pub playtime_forever: u64,
}

impl OwnedGamesResponse {
    /// Lifetime minutes played, 0 if the game is not in the library
    pub fn playtime_for(&self, app_id: AppId) -> u64 {
        self.response
            .games
            .iter()
            .find(|g| g.appid == app_id.0)
            .map_or(0, |g| g.playtime_forever)
    }
}

// ISteamUserStats/GetSchemaForGame

#[derive(Debug, Default, Deserialize)]
pub struct SchemaResponse {
    #[serde(default)]
    pub game: SchemaGame,
}

#[derive(Debug, Default, Deserialize)]
pub struct SchemaGame {
    #[serde(rename = "availableGameStats", default)]
    pub available: AvailableGameStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct AvailableGameStats {
    #[serde(default)]
    pub stats: Vec<SchemaStat>,
    #[serde(default)]
    pub achievements: Vec<SchemaAchievement>,
}

#[derive(Debug, Deserialize)]
pub struct SchemaStat {
    pub name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SchemaAchievement {
    pub name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl SchemaResponse {
    pub fn into_schema(self) -> GameSchema {
        let available = self.game.available;

        let stats = available
            .stats
            .into_iter()
            .map(|s| {
                let display = s.display_name.unwrap_or_else(|| s.name.clone());
                (s.name, display)
            })
            .collect();

        let achievements = available
            .achievements
            .into_iter()
            .map(|a| {
                let meta = AchievementMeta {
                    display_name: a.display_name.unwrap_or_else(|| a.name.clone()),
                    description: a.description.unwrap_or_default(),
                    icon: a.icon.unwrap_or_default(),
                };
                (a.name, meta)
            })
            .collect();

        GameSchema {
            stats,
            achievements,
        }
    }
}
