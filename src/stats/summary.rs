//! Derived numbers for the dashboard overview
//!
//! Pure helpers over a `Report` and snapshot values. Nothing here reads
//! from the network or holds state.

use crate::stats::achievements::GameSchema;
use crate::stats::aggregate::{PerkRecord, Report};
use crate::stats::level::MAX_PERK_LEVEL;
use crate::stats::raw::RawStats;
use serde::Serialize;

/// Headline numbers across all perks the player has touched
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerkSummary {
    pub perk_count: usize,
    pub maxed_count: usize,
    pub total_xp: u64,
    pub average_level: f64,
}

impl PerkSummary {
    pub fn from_report(report: &Report) -> Self {
        let perk_count = report.perks.len();
        let maxed_count = report.perks.iter().filter(|p| p.is_max).count();
        let total_xp = report.perks.iter().map(|p| p.xp).sum();
        let average_level = if perk_count > 0 {
            report.perks.iter().map(|p| p.level as f64).sum::<f64>() / perk_count as f64
        } else {
            0.0
        };

        Self {
            perk_count,
            maxed_count,
            total_xp,
            average_level,
        }
    }

    /// Share of touched perks at max level (0 when none are touched)
    pub fn maxed_percent(&self) -> f64 {
        if self.perk_count == 0 {
            0.0
        } else {
            self.maxed_count as f64 / self.perk_count as f64 * 100.0
        }
    }
}

/// Perk records, highest level first; equal levels keep table order
pub fn perks_by_level(report: &Report) -> Vec<PerkRecord> {
    let mut perks = report.perks.clone();
    perks.sort_by(|a, b| b.level.cmp(&a.level));
    perks
}

/// Coarse level bracket used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LevelTier {
    Low,
    Mid,
    High,
    Max,
}

impl LevelTier {
    pub fn of(level: u32) -> Self {
        if level >= MAX_PERK_LEVEL {
            LevelTier::Max
        } else if level >= 20 {
            LevelTier::High
        } else if level >= 15 {
            LevelTier::Mid
        } else {
            LevelTier::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LevelTier::Low => "Low",
            LevelTier::Mid => "Mid",
            LevelTier::High => "High",
            LevelTier::Max => "Max",
        }
    }
}

/// Total time played, with per-hour rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Playtime {
    pub minutes: u64,
}

impl Playtime {
    pub fn from_minutes(minutes: u64) -> Self {
        Self { minutes }
    }

    pub fn hours(&self) -> f64 {
        self.minutes as f64 / 60.0
    }

    /// `count` per hour played, or `None` without recorded playtime
    ///
    /// Under an hour of play divides by one hour.
    pub fn per_hour(&self, count: u64) -> Option<f64> {
        if self.minutes == 0 {
            None
        } else {
            Some(count as f64 / self.hours().max(1.0))
        }
    }
}

/// Placeholder for stats the schema does not name
pub const NO_SCHEMA: &str = "(no schema)";

/// One raw stat with its schema name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugEntry {
    pub key: String,
    pub display_name: String,
    pub value: u64,
}

/// Every raw stat the player has, for troubleshooting the classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugListing {
    /// Sorted by stat key
    pub entries: Vec<DebugEntry>,
    pub non_zero: usize,
}

impl DebugListing {
    pub fn build(raw: &RawStats, schema: &GameSchema) -> Self {
        let mut entries: Vec<DebugEntry> = raw
            .iter()
            .map(|(key, value)| DebugEntry {
                key: key.to_string(),
                display_name: schema.stat_display_name(key).unwrap_or(NO_SCHEMA).to_string(),
                value,
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        let non_zero = entries.iter().filter(|e| e.value > 0).count();

        Self { entries, non_zero }
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn zero(&self) -> usize {
        self.entries.len() - self.non_zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::StatId;
    use crate::stats::aggregate::aggregate;
    use crate::stats::tables::Perk;

    #[test]
    fn test_summary_of_empty_report() {
        let summary = PerkSummary::from_report(&Report::default());
        assert_eq!(summary.perk_count, 0);
        assert_eq!(summary.average_level, 0.0);
        assert_eq!(summary.maxed_percent(), 0.0);
    }

    #[test]
    fn test_summary_counts() {
        let raw = RawStats::new()
            .with(StatId(1), 279978)
            .with(StatId(10), 2640)
            .with(StatId(20), 5557)
            .with(StatId(30), 8781);
        let summary = PerkSummary::from_report(&aggregate(&raw));
        assert_eq!(summary.perk_count, 4);
        assert_eq!(summary.maxed_count, 1);
        assert_eq!(summary.total_xp, 279978 + 2640 + 5557 + 8781);
        // (25 + 1 + 2 + 3) / 4
        assert_eq!(summary.average_level, 7.75);
        assert_eq!(summary.maxed_percent(), 25.0);
    }

    #[test]
    fn test_perks_by_level_is_stable() {
        let raw = RawStats::new()
            .with(StatId(1), 100)
            .with(StatId(10), 280_000)
            .with(StatId(20), 200);
        let order: Vec<Perk> = perks_by_level(&aggregate(&raw)).iter().map(|p| p.perk).collect();
        assert_eq!(order, vec![Perk::Berserker, Perk::Commando, Perk::Support]);
    }

    #[test]
    fn test_level_tiers() {
        assert_eq!(LevelTier::of(0), LevelTier::Low);
        assert_eq!(LevelTier::of(14), LevelTier::Low);
        assert_eq!(LevelTier::of(15), LevelTier::Mid);
        assert_eq!(LevelTier::of(20), LevelTier::High);
        assert_eq!(LevelTier::of(24), LevelTier::High);
        assert_eq!(LevelTier::of(25), LevelTier::Max);
    }

    #[test]
    fn test_playtime_rates() {
        assert_eq!(Playtime::from_minutes(0).per_hour(100), None);
        assert_eq!(Playtime::from_minutes(30).per_hour(100), Some(100.0));
        assert_eq!(Playtime::from_minutes(600).per_hour(100), Some(10.0));
        assert_eq!(Playtime::from_minutes(90).hours(), 1.5);
    }

    #[test]
    fn test_debug_listing() {
        let raw: RawStats = [("1_2", 0u64), ("1_1", 5), ("1_9999", 3)].into_iter().collect();
        let mut schema = GameSchema::default();
        schema.stats.insert("1_1".into(), "Commando XP".into());

        let listing = DebugListing::build(&raw, &schema);
        let keys: Vec<_> = listing.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["1_1", "1_2", "1_9999"]);
        assert_eq!(listing.entries[0].display_name, "Commando XP");
        assert_eq!(listing.entries[2].display_name, NO_SCHEMA);
        assert_eq!(listing.total(), 3);
        assert_eq!(listing.non_zero, 2);
        assert_eq!(listing.zero(), 1);
    }
}
