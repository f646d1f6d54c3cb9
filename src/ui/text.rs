//! Plain-text report
//!
//! The simple front end: sectioned tables written to a string, suitable for
//! a terminal or a pipe. Zero-valued counters are hidden here; the report
//! itself keeps them.

use crate::core::error::Result;
use crate::stats::tables::{MATCH_WINS, TOTAL_KILLS};
use crate::stats::{perks_by_level, CounterBreakdown};
use crate::ui::format::{
    hours, percent, rate, thousands, KILL_RATE_DECIMALS, WIN_RATE_DECIMALS,
};
use crate::ui::DashboardData;
use std::fmt::Write;

/// Render every section of the report
pub fn render_report(data: &DashboardData) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, data);
    out
}

/// The dashboard data as pretty JSON
pub fn render_json(data: &DashboardData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

fn write_report(out: &mut String, data: &DashboardData) -> std::fmt::Result {
    writeln!(out, "=== {} Stats ===", data.game_name)?;
    writeln!(
        out,
        "Playtime: {} ({} min)",
        hours(data.playtime.minutes),
        thousands(data.playtime.minutes)
    )?;

    write_perks(out, data)?;
    write_counters(out, "Kills", &data.report.kills, false, "No kill data found.")?;
    write_counters(
        out,
        "Personal Bests",
        &data.report.personal_bests,
        true,
        "No personal best data found.",
    )?;
    write_achievements(out, data)?;
    write_special(out, data)?;
    if data.debug.is_some() {
        write_debug(out, data)?;
    }
    Ok(())
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "--- {} ---", title)
}

fn write_perks(out: &mut String, data: &DashboardData) -> std::fmt::Result {
    section(out, "Perks")?;
    if data.report.perks.is_empty() {
        return writeln!(out, "No perk data found.");
    }

    let summary = &data.perk_summary;
    writeln!(
        out,
        "Perks: {}   Maxed: {}/{}   Total XP: {}   Average level: {:.1}",
        summary.perk_count,
        summary.maxed_count,
        summary.perk_count,
        thousands(summary.total_xp),
        summary.average_level
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<14} {:>5} {:>9} {:>10} {:>11}",
        "Perk", "Level", "Progress", "XP", "Next Level"
    )?;

    for perk in perks_by_level(&data.report) {
        let next = if perk.is_max {
            "MAX".to_string()
        } else {
            thousands(perk.xp_to_next)
        };
        writeln!(
            out,
            "{:<14} {:>5} {:>9} {:>10} {:>11}",
            perk.perk.name(),
            perk.level,
            percent(perk.progress_percent),
            thousands(perk.xp),
            next
        )?;
        if let Some(bonus) = perk.bonus {
            writeln!(out, "  {}: {}", bonus.kind.label(), thousands(bonus.value))?;
        }
    }
    Ok(())
}

fn write_counters(
    out: &mut String,
    title: &str,
    counters: &CounterBreakdown,
    sort_desc: bool,
    empty: &str,
) -> std::fmt::Result {
    section(out, title)?;
    if !counters.has_any() {
        return writeln!(out, "{}", empty);
    }

    let rows: Vec<_> = if sort_desc {
        counters.sorted_desc()
    } else {
        counters.active().copied().collect()
    };
    for counter in rows {
        writeln!(out, "{:<24} {:>12}", counter.label, thousands(counter.value))?;
    }
    Ok(())
}

fn write_achievements(out: &mut String, data: &DashboardData) -> std::fmt::Result {
    section(out, "Achievements")?;
    let progress = &data.achievement_progress;
    writeln!(
        out,
        "Unlocked: {} / {} ({:.2}%)",
        progress.achieved, progress.total, progress.percent
    )?;

    if data.achievements.is_empty() {
        writeln!(out, "No achievements unlocked.")?;
    } else {
        for achievement in &data.achievements {
            writeln!(out, "  * {}: {}", achievement.display_name, achievement.description)?;
        }
    }

    if data.report.achievement_counters.has_any() {
        writeln!(out)?;
        writeln!(out, "Achievement counters (from stats):")?;
        for counter in data.report.achievement_counters.active() {
            writeln!(out, "  {:<22} {:>12}", counter.label, thousands(counter.value))?;
        }
    }
    Ok(())
}

fn write_special(out: &mut String, data: &DashboardData) -> std::fmt::Result {
    section(out, "Special Stats")?;
    for counter in data.report.special_counters.iter() {
        writeln!(out, "{:<24} {:>12}", counter.label, thousands(counter.value))?;
    }

    let kills = data.report.kills.value(TOTAL_KILLS);
    let wins = data.report.special_counters.value(MATCH_WINS);
    let kill_rate = rate(data.playtime.per_hour(kills), KILL_RATE_DECIMALS, "kills/h");
    let win_rate = rate(data.playtime.per_hour(wins), WIN_RATE_DECIMALS, "wins/h");
    writeln!(out, "{:<24} {:>12}", "Kill rate", kill_rate)?;
    writeln!(out, "{:<24} {:>12}", "Win rate", win_rate)
}

fn write_debug(out: &mut String, data: &DashboardData) -> std::fmt::Result {
    let Some(listing) = &data.debug else {
        return Ok(());
    };

    section(out, "Raw Stats")?;
    writeln!(
        out,
        "Total: {}   Non-zero: {}   Zero: {}",
        listing.total(),
        listing.non_zero,
        listing.zero()
    )?;
    for entry in &listing.entries {
        writeln!(
            out,
            "{:<10} {:<32} {:>12}",
            entry.key,
            entry.display_name,
            thousands(entry.value)
        )?;
    }
    Ok(())
}
