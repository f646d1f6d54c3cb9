//! Presentation for the two viewer front ends
//!
//! `text` renders the plain report, `dashboard` the full-screen terminal
//! view. Both read the same `DashboardData`, built once per fetch.

pub mod dashboard;
pub mod format;
pub mod state;
pub mod text;

pub use state::{DashboardState, Tab};

use crate::core::types::Game;
use crate::stats::{
    resolve_achievements, tables_for, AchievementProgress, DebugListing, PerkSummary, Playtime,
    Report, ResolvedAchievement,
};
use crate::steam::PlayerSnapshot;
use serde::Serialize;

/// Everything either dashboard displays
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub game: Game,
    pub game_name: String,
    pub report: Report,
    pub perk_summary: PerkSummary,
    pub playtime: Playtime,
    pub achievement_progress: AchievementProgress,
    pub achievements: Vec<ResolvedAchievement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugListing>,
}

impl DashboardData {
    pub fn build(game: Game, snapshot: &PlayerSnapshot, show_debug: bool) -> Self {
        let report = tables_for(game).aggregate(&snapshot.stats);
        let perk_summary = PerkSummary::from_report(&report);

        Self {
            game,
            game_name: snapshot
                .game_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| game.name().to_string()),
            report,
            perk_summary,
            playtime: Playtime::from_minutes(snapshot.playtime_minutes),
            achievement_progress: AchievementProgress::new(
                snapshot.achievements.len(),
                snapshot.total_achievements,
            ),
            achievements: resolve_achievements(&snapshot.achievements, &snapshot.schema),
            debug: show_debug.then(|| DebugListing::build(&snapshot.stats, &snapshot.schema)),
        }
    }
}
