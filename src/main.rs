//! KF2 Stats - Full-screen dashboard
//!
//! Fetches one player's Killing Floor 2 stats and shows them in a tabbed
//! terminal dashboard. Logs go to a file so they don't tear the UI.

use clap::Parser;
use kf2_stats::app::{fetch_blocking, init_logging, CommonArgs, LogTarget};
use kf2_stats::core::error::Result;
use kf2_stats::ui::{dashboard, DashboardData};
use std::path::Path;

const LOG_FILE: &str = "kf2-stats.log";

#[derive(Parser, Debug)]
#[command(name = "kf2-stats")]
#[command(about = "Killing Floor 2 stats dashboard", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LogTarget::File(Path::new(LOG_FILE)), cli.common.verbose)?;

    tracing::info!("KF2 Stats starting...");

    let config = cli.common.resolve_config()?;

    println!("Fetching {} stats from Steam...", config.game.name());
    let snapshot = fetch_blocking(&config)?;
    let data = DashboardData::build(config.game, &snapshot, config.show_debug);

    tracing::info!(
        perks = data.report.perks.len(),
        achievements = data.achievements.len(),
        "Snapshot loaded"
    );

    dashboard::run(&data)
}
