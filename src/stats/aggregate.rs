//! Turn a flat stat mapping into a structured report
//!
//! Every lookup goes through `RawStats::get`, which reads a missing stat as
//! zero, so aggregation cannot fail on any input.

use crate::core::types::StatId;
use crate::stats::raw::RawStats;
use crate::stats::tables::{BonusKind, CounterStat, Perk, PerkStats, StatTables, KF2_TABLES};
use serde::Serialize;

/// Level and experience for one perk the player has touched
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerkRecord {
    pub perk: Perk,
    pub level: u32,
    /// Experience the level was computed from (progress, or build as fallback)
    pub xp: u64,
    pub progress_percent: f64,
    pub xp_to_next: u64,
    pub is_max: bool,
    pub bonus: Option<PerkBonus>,
}

/// Perk-specific secondary counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerkBonus {
    pub kind: BonusKind,
    pub value: u64,
}

/// One labelled counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counter {
    pub label: &'static str,
    pub stat: StatId,
    pub value: u64,
}

/// Counters in classification-table order, zeros included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CounterBreakdown(Vec<Counter>);

impl CounterBreakdown {
    fn read(raw: &RawStats, table: &[CounterStat]) -> Self {
        Self(
            table
                .iter()
                .map(|c| Counter {
                    label: c.label,
                    stat: c.stat,
                    value: raw.get(c.stat),
                })
                .collect(),
        )
    }

    /// Value for a label, 0 if the label is not in this breakdown
    pub fn value(&self, label: &str) -> u64 {
        self.0
            .iter()
            .find(|c| c.label == label)
            .map_or(0, |c| c.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Counter> {
        self.0.iter()
    }

    /// Non-zero counters, in table order
    pub fn active(&self) -> impl Iterator<Item = &Counter> {
        self.0.iter().filter(|c| c.value > 0)
    }

    /// Non-zero counters, highest first (ties keep table order)
    pub fn sorted_desc(&self) -> Vec<Counter> {
        let mut active: Vec<Counter> = self.active().copied().collect();
        active.sort_by(|a, b| b.value.cmp(&a.value));
        active
    }

    pub fn has_any(&self) -> bool {
        self.0.iter().any(|c| c.value > 0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the dashboards show, derived from one stat mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Perks with any experience, in classification-table order
    pub perks: Vec<PerkRecord>,
    pub kills: CounterBreakdown,
    pub personal_bests: CounterBreakdown,
    /// Stat-backed achievement counters; separate from the unlocked achievement list
    pub achievement_counters: CounterBreakdown,
    pub special_counters: CounterBreakdown,
}

impl Report {
    pub fn perk(&self, perk: Perk) -> Option<&PerkRecord> {
        self.perks.iter().find(|p| p.perk == perk)
    }
}

impl StatTables {
    /// Classify a raw stat mapping against these tables
    pub fn aggregate(&self, raw: &RawStats) -> Report {
        Report {
            perks: self
                .perks
                .iter()
                .filter_map(|def| self.perk_record(raw, def))
                .collect(),
            kills: CounterBreakdown::read(raw, self.kills),
            personal_bests: CounterBreakdown::read(raw, self.personal_bests),
            achievement_counters: CounterBreakdown::read(raw, self.achievement_counters),
            special_counters: CounterBreakdown::read(raw, self.special_counters),
        }
    }

    fn perk_record(&self, raw: &RawStats, def: &PerkStats) -> Option<PerkRecord> {
        let progress_xp = raw.get(def.progress);
        let build_xp = raw.get(def.build);
        if progress_xp == 0 && build_xp == 0 {
            return None;
        }

        // Progress experience wins; build experience only stands in for a zero
        let xp = if progress_xp > 0 { progress_xp } else { build_xp };
        let info = self.level_table.level_info(xp);

        Some(PerkRecord {
            perk: def.perk,
            level: info.level,
            xp,
            progress_percent: info.progress_percent,
            xp_to_next: info.xp_to_next,
            is_max: info.is_max(),
            bonus: def.bonus.map(|(kind, stat)| PerkBonus {
                kind,
                value: raw.get(stat),
            }),
        })
    }
}

/// Classify a raw stat mapping against the Killing Floor 2 tables
pub fn aggregate(raw: &RawStats) -> Report {
    KF2_TABLES.aggregate(raw)
}
