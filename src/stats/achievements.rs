//! Unlocked achievements and their display metadata
//!
//! This is the achievement list Steam reports as unlocked. It is kept apart
//! from the stat-backed achievement counters in the report; the two are
//! shown side by side and never merged.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// An unlocked achievement as reported for the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    /// Internal API name
    pub name: String,
    /// Unix time of the unlock, when Steam reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_time: Option<u64>,
}

impl AchievementRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unlock_time: None,
        }
    }
}

/// Display metadata for one achievement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementMeta {
    pub display_name: String,
    pub description: String,
    pub icon: String,
}

/// Display names for a game's stats and achievements
#[derive(Debug, Clone, Default)]
pub struct GameSchema {
    /// Stat key -> display name
    pub stats: AHashMap<String, String>,
    /// Achievement API name -> metadata
    pub achievements: AHashMap<String, AchievementMeta>,
}

impl GameSchema {
    /// Number of achievements the game defines
    pub fn total_achievements(&self) -> usize {
        self.achievements.len()
    }

    pub fn stat_display_name(&self, key: &str) -> Option<&str> {
        self.stats.get(key).map(String::as_str)
    }
}

/// Unlocked count against the game's total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AchievementProgress {
    pub achieved: usize,
    pub total: usize,
    pub percent: f64,
}

impl AchievementProgress {
    pub fn new(achieved: usize, total: usize) -> Self {
        let percent = if total > 0 {
            achieved as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            achieved,
            total,
            percent,
        }
    }

    /// Fraction for progress bars, capped at 1.0
    pub fn ratio(&self) -> f64 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }
}

/// An unlocked achievement ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAchievement {
    pub name: String,
    pub display_name: String,
    pub description: String,
}

/// Placeholder shown when the schema has no description
pub const NO_DESCRIPTION: &str = "-";

/// Attach schema metadata to each unlocked achievement
///
/// Achievements missing from the schema show their API name.
pub fn resolve_achievements(
    records: &[AchievementRecord],
    schema: &GameSchema,
) -> Vec<ResolvedAchievement> {
    records
        .iter()
        .map(|record| match schema.achievements.get(&record.name) {
            Some(meta) => ResolvedAchievement {
                name: record.name.clone(),
                display_name: if meta.display_name.is_empty() {
                    record.name.clone()
                } else {
                    meta.display_name.clone()
                },
                description: if meta.description.is_empty() {
                    NO_DESCRIPTION.to_string()
                } else {
                    meta.description.clone()
                },
            },
            None => ResolvedAchievement {
                name: record.name.clone(),
                display_name: record.name.clone(),
                description: NO_DESCRIPTION.to_string(),
            },
        })
        .collect()
}
