//! Integration tests from Steam responses through to rendered reports

use kf2_stats::core::types::{AppId, Game, StatId};
use kf2_stats::stats::{
    aggregate, tables_for, BonusKind, Perk, RawStats, KF2_TABLES, MAX_PERK_LEVEL,
};
use kf2_stats::steam::wire::{OwnedGamesResponse, SchemaResponse, UserStatsResponse};
use kf2_stats::steam::PlayerSnapshot;
use kf2_stats::ui::text::{render_json, render_report};
use kf2_stats::ui::DashboardData;

const STATS_BODY: &str = r#"{
  "playerstats": {
    "steamID": "76561198000000000",
    "gameName": "KillingFloor2",
    "stats": [
      {"name": "1_1", "value": 279978},
      {"name": "1_10", "value": 100},
      {"name": "1_11", "value": 5000},
      {"name": "1_21", "value": 1320},
      {"name": "1_22", "value": 77},
      {"name": "1_40", "value": 2640},
      {"name": "1_42", "value": 1500},
      {"name": "1_200", "value": 4200},
      {"name": "1_201", "value": 120},
      {"name": "1_2002", "value": 31},
      {"name": "1_2007", "value": 98000},
      {"name": "1_3000", "value": 12},
      {"name": "1_4013", "value": 3},
      {"name": "1_9999", "value": 5}
    ],
    "achievements": [
      {"name": "ACH_WIN_HARD", "achieved": 1, "unlocktime": 1700000000},
      {"name": "ACH_UNKNOWN", "achieved": 1}
    ]
  }
}"#;

const SCHEMA_BODY: &str = r#"{
  "game": {
    "gameName": "KillingFloor2",
    "availableGameStats": {
      "stats": [{"name": "1_200", "defaultvalue": 0, "displayName": "Zeds Killed"}],
      "achievements": [
        {"name": "ACH_WIN_HARD", "displayName": "Hard Win", "description": "Win on Hard", "icon": "a.jpg"},
        {"name": "ACH_OTHER", "displayName": "Other", "description": "", "icon": ""},
        {"name": "ACH_THIRD", "displayName": "Third"},
        {"name": "ACH_FOURTH", "displayName": "Fourth"}
      ]
    }
  }
}"#;

const OWNED_BODY: &str = r#"{"response": {"game_count": 1, "games": [
  {"appid": 232090, "playtime_forever": 120}
]}}"#;

fn snapshot() -> PlayerSnapshot {
    let stats: UserStatsResponse = serde_json::from_str(STATS_BODY).unwrap();
    let data = stats.playerstats.unwrap().into_data().unwrap();
    let schema: SchemaResponse = serde_json::from_str(SCHEMA_BODY).unwrap();
    let owned: OwnedGamesResponse = serde_json::from_str(OWNED_BODY).unwrap();
    let schema = schema.into_schema();

    PlayerSnapshot {
        game_name: data.game_name,
        stats: data.stats,
        achievements: data.achievements,
        playtime_minutes: owned.playtime_for(Game::KillingFloor2.app_id()),
        total_achievements: schema.total_achievements(),
        schema,
    }
}

#[test]
fn test_empty_stats_give_empty_report() {
    let report = aggregate(&RawStats::new());
    assert!(report.perks.is_empty());
    assert!(report.kills.iter().all(|c| c.value == 0));
    assert!(report.personal_bests.iter().all(|c| c.value == 0));
    assert!(report.special_counters.iter().all(|c| c.value == 0));
    // Zero counters are still listed
    assert_eq!(report.kills.len(), KF2_TABLES.kills.len());
}

#[test]
fn test_perk_experience_selection() {
    let report = aggregate(&snapshot().stats);

    // Progress beats build even when smaller
    let berserker = report.perk(Perk::Berserker).unwrap();
    assert_eq!(berserker.xp, 100);
    assert_eq!(berserker.level, 0);

    // Build stands in for missing progress
    let support = report.perk(Perk::Support).unwrap();
    assert_eq!(support.xp, 1320);
    assert_eq!(support.progress_percent, 50.0);
    assert_eq!(support.bonus.unwrap().kind, BonusKind::WeldPoints);
    assert_eq!(support.bonus.unwrap().value, 77);

    let medic = report.perk(Perk::FieldMedic).unwrap();
    assert_eq!(medic.level, 1);
    assert_eq!(medic.xp_to_next, 2917);
    assert_eq!(medic.bonus.unwrap().kind, BonusKind::HealPoints);

    let commando = report.perk(Perk::Commando).unwrap();
    assert_eq!(commando.level, MAX_PERK_LEVEL);
    assert!(commando.is_max);

    // Untouched perks are absent
    assert!(report.perk(Perk::Swat).is_none());
    assert_eq!(report.perks.len(), 4);
}

#[test]
fn test_perks_keep_table_order() {
    let report = aggregate(&snapshot().stats);
    let order: Vec<Perk> = report.perks.iter().map(|p| p.perk).collect();
    assert_eq!(
        order,
        vec![Perk::Commando, Perk::Berserker, Perk::Support, Perk::FieldMedic]
    );
}

#[test]
fn test_counters_classified() {
    let report = tables_for(Game::KillingFloor2).aggregate(&snapshot().stats);
    assert_eq!(report.kills.value("Total Kills"), 4200);
    assert_eq!(report.kills.value("Stalker Kills"), 120);
    assert_eq!(report.personal_bests.value("Headshots"), 31);
    assert_eq!(report.personal_bests.value("Dosh Earned"), 98000);
    assert_eq!(report.achievement_counters.value("Fleshpound Kill"), 3);
    assert_eq!(report.special_counters.value("Match Wins"), 12);
}

#[test]
fn test_unclassified_stats_ignored_but_listed_in_debug() {
    let snapshot = snapshot();
    assert_eq!(snapshot.stats.get(StatId(9999)), 5);

    let data = DashboardData::build(Game::KillingFloor2, &snapshot, true);
    let debug = data.debug.as_ref().unwrap();
    assert_eq!(debug.total(), 14);
    assert!(debug.entries.iter().any(|e| e.key == "1_9999"));
    let named = debug.entries.iter().find(|e| e.key == "1_200").unwrap();
    assert_eq!(named.display_name, "Zeds Killed");
}

#[test]
fn test_dashboard_data() {
    let data = DashboardData::build(Game::KillingFloor2, &snapshot(), false);
    assert_eq!(data.game_name, "KillingFloor2");
    assert_eq!(data.playtime.minutes, 120);
    assert_eq!(data.playtime.per_hour(4200), Some(2100.0));
    assert_eq!(data.achievement_progress.achieved, 2);
    assert_eq!(data.achievement_progress.total, 4);
    assert_eq!(data.achievement_progress.percent, 50.0);
    assert_eq!(data.perk_summary.maxed_count, 1);
    assert!(data.debug.is_none());

    assert_eq!(data.achievements[0].display_name, "Hard Win");
    assert_eq!(data.achievements[1].display_name, "ACH_UNKNOWN");
    assert_eq!(data.achievements[1].description, "-");
}

#[test]
fn test_text_report() {
    let data = DashboardData::build(Game::KillingFloor2, &snapshot(), false);
    let text = render_report(&data);

    assert!(text.starts_with("=== KillingFloor2 Stats ==="));
    assert!(text.contains("Playtime: 2.0h (120 min)"));
    assert!(text.contains("Maxed: 1/4"));
    assert!(text.contains("Weld Points: 77"));
    assert!(text.contains("Heal Points: 1,500"));
    assert!(text.contains("MAX"));
    assert!(text.contains("Stalker Kills"));
    // Zero kill counters are hidden
    assert!(!text.contains("Fleshpound Kills"));
    assert!(text.contains("Unlocked: 2 / 4 (50.00%)"));
    assert!(text.contains("* Hard Win: Win on Hard"));
    assert!(text.contains("2100.0 kills/h"));
    assert!(text.contains("6.00 wins/h"));
    assert!(!text.contains("Raw Stats"));

    // Highest personal best first
    let dosh = text.find("Dosh Earned").unwrap();
    let headshots = text.find("Headshots").unwrap();
    assert!(dosh < headshots);
}

#[test]
fn test_text_report_empty_sections() {
    let snapshot = PlayerSnapshot {
        game_name: None,
        stats: RawStats::new(),
        achievements: Vec::new(),
        playtime_minutes: 0,
        total_achievements: 0,
        schema: Default::default(),
    };
    let data = DashboardData::build(Game::KillingFloor2, &snapshot, false);
    let text = render_report(&data);

    assert!(text.starts_with("=== Killing Floor 2 Stats ==="));
    assert!(text.contains("No perk data found."));
    assert!(text.contains("No kill data found."));
    assert!(text.contains("No personal best data found."));
    assert!(text.contains("No achievements unlocked."));
    assert!(text.contains("Unlocked: 0 / 0 (0.00%)"));
}

#[test]
fn test_json_report() {
    let data = DashboardData::build(Game::KillingFloor2, &snapshot(), false);
    let json: serde_json::Value = serde_json::from_str(&render_json(&data).unwrap()).unwrap();

    assert_eq!(json["game"], "kf2");
    assert_eq!(json["report"]["perks"][0]["perk"], "Commando");
    assert_eq!(json["report"]["perks"][0]["level"], 25);
    assert_eq!(json["playtime"]["minutes"], 120);
    assert!(json.get("debug").is_none());
}

#[test]
fn test_app_id() {
    assert_eq!(Game::KillingFloor2.app_id(), AppId(232090));
}
