//! Stat classification tables
//!
//! Steam exposes Killing Floor 2 stats as bare numeric IDs. These tables
//! say which IDs carry perk experience, kill counts, personal bests,
//! achievement counters and miscellaneous progress counters.

use crate::core::types::{Game, StatId};
use crate::stats::level::{LevelTable, PERK_XP_TABLE};
use serde::{Deserialize, Serialize};

/// Player specialization track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perk {
    Commando,
    Berserker,
    Support,
    Firebug,
    FieldMedic,
    Sharpshooter,
    Demolitionist,
    Survivalist,
    Gunslinger,
    Swat,
}

impl Perk {
    pub fn name(&self) -> &'static str {
        match self {
            Perk::Commando => "Commando",
            Perk::Berserker => "Berserker",
            Perk::Support => "Support",
            Perk::Firebug => "Firebug",
            Perk::FieldMedic => "Field Medic",
            Perk::Sharpshooter => "Sharpshooter",
            Perk::Demolitionist => "Demolitionist",
            Perk::Survivalist => "Survivalist",
            Perk::Gunslinger => "Gunslinger",
            Perk::Swat => "SWAT",
        }
    }
}

/// Kind of perk-specific secondary counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    WeldPoints,
    HealPoints,
}

impl BonusKind {
    pub fn label(&self) -> &'static str {
        match self {
            BonusKind::WeldPoints => "Weld Points",
            BonusKind::HealPoints => "Heal Points",
        }
    }
}

/// Stat IDs that describe one perk
#[derive(Debug, Clone, Copy)]
pub struct PerkStats {
    pub perk: Perk,
    /// Primary experience counter
    pub progress: StatId,
    /// Fallback experience counter, read only when `progress` is zero
    pub build: StatId,
    pub bonus: Option<(BonusKind, StatId)>,
}

/// A labelled counter read straight from the raw stats
#[derive(Debug, Clone, Copy)]
pub struct CounterStat {
    pub label: &'static str,
    pub stat: StatId,
}

const fn perk(perk: Perk, progress: u32, build: u32) -> PerkStats {
    PerkStats {
        perk,
        progress: StatId(progress),
        build: StatId(build),
        bonus: None,
    }
}

const fn perk_with_bonus(perk: Perk, progress: u32, build: u32, kind: BonusKind, bonus: u32) -> PerkStats {
    PerkStats {
        perk,
        progress: StatId(progress),
        build: StatId(build),
        bonus: Some((kind, StatId(bonus))),
    }
}

const fn counter(label: &'static str, stat: u32) -> CounterStat {
    CounterStat {
        label,
        stat: StatId(stat),
    }
}

pub static PERK_STATS: &[PerkStats] = &[
    perk(Perk::Commando, 1, 2),
    perk(Perk::Berserker, 10, 11),
    perk_with_bonus(Perk::Support, 20, 21, BonusKind::WeldPoints, 22),
    perk(Perk::Firebug, 30, 31),
    perk_with_bonus(Perk::FieldMedic, 40, 41, BonusKind::HealPoints, 42),
    perk(Perk::Sharpshooter, 50, 51),
    perk(Perk::Demolitionist, 60, 61),
    perk(Perk::Survivalist, 70, 71),
    perk(Perk::Gunslinger, 80, 81),
    perk(Perk::Swat, 90, 91),
];

// Labels the dashboards look up directly
pub const TOTAL_KILLS: &str = "Total Kills";
pub const BEST_HEADSHOTS: &str = "Headshots";
pub const MATCH_WINS: &str = "Match Wins";

pub static KILL_STATS: &[CounterStat] = &[
    counter(TOTAL_KILLS, 200),
    counter("Stalker Kills", 201),
    counter("Crawler Kills", 202),
    counter("Fleshpound Kills", 203),
];

pub static PERSONAL_BEST_STATS: &[CounterStat] = &[
    counter("Knife Kills", 2000),
    counter("Pistol Kills", 2001),
    counter(BEST_HEADSHOTS, 2002),
    counter("Healing", 2003),
    counter("Kills", 2004),
    counter("Assists", 2005),
    counter("Large Zed Kills", 2006),
    counter("Dosh Earned", 2007),
];

pub static ACHIEVEMENT_COUNTER_STATS: &[CounterStat] = &[
    counter("MrPerky5", 4001),
    counter("MrPerky10", 4002),
    counter("MrPerky15", 4003),
    counter("MrPerky20", 4004),
    counter("MrPerky25", 4005),
    counter("Hard Win", 4015),
    counter("Suicidal Win", 4016),
    counter("Hell on Earth Win", 4017),
    counter("VS Zed Win", 4009),
    counter("VS Human Win", 4010),
    counter("Hold Out", 4011),
    counter("Die Volter", 4012),
    counter("Fleshpound Kill", 4013),
    counter("Shrike Kill", 4014),
    counter("Siren Kill", 4018),
    counter("Benefactor", 4019),
    counter("Heal Team", 4020),
    counter("Quick On The Trigger", 4033),
];

pub static SPECIAL_COUNTER_STATS: &[CounterStat] = &[
    counter("Special Event Progress", 300),
    counter("Weekly Event Progress", 301),
    counter("Daily Event Info", 302),
    counter("Dosh Vault Total", 400),
    counter("Dosh Vault Progress", 402),
    counter(MATCH_WINS, 3000),
];

/// Full classification for one game, plus its level curve
#[derive(Debug, Clone, Copy)]
pub struct StatTables {
    pub level_table: &'static LevelTable,
    pub perks: &'static [PerkStats],
    pub kills: &'static [CounterStat],
    pub personal_bests: &'static [CounterStat],
    pub achievement_counters: &'static [CounterStat],
    pub special_counters: &'static [CounterStat],
}

pub static KF2_TABLES: StatTables = StatTables {
    level_table: &PERK_XP_TABLE,
    perks: PERK_STATS,
    kills: KILL_STATS,
    personal_bests: PERSONAL_BEST_STATS,
    achievement_counters: ACHIEVEMENT_COUNTER_STATS,
    special_counters: SPECIAL_COUNTER_STATS,
};

/// Classification tables for a supported game
pub fn tables_for(game: Game) -> &'static StatTables {
    match game {
        Game::KillingFloor2 => &KF2_TABLES,
    }
}
