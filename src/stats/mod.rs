//! Stat classification and perk leveling
//!
//! Pure, synchronous code: raw stats in, a `Report` out.

pub mod achievements;
pub mod aggregate;
pub mod level;
pub mod raw;
pub mod summary;
pub mod tables;

pub use achievements::{
    resolve_achievements, AchievementMeta, AchievementProgress, AchievementRecord, GameSchema,
    ResolvedAchievement,
};
pub use aggregate::{aggregate, Counter, CounterBreakdown, PerkBonus, PerkRecord, Report};
pub use level::{level_info, LevelInfo, LevelTable, MAX_PERK_LEVEL, PERK_XP_TABLE};
pub use raw::RawStats;
pub use summary::{perks_by_level, DebugListing, LevelTier, PerkSummary, Playtime};
pub use tables::{tables_for, BonusKind, Perk, StatTables, KF2_TABLES};
