//! KF2 Stats - Plain report
//!
//! Prints the same data as the dashboard as sectioned text, or as JSON
//! with `--json`. Suitable for pipes and scripts.

use clap::Parser;
use kf2_stats::app::{fetch_blocking, init_logging, CommonArgs, LogTarget};
use kf2_stats::core::error::Result;
use kf2_stats::ui::text::{render_json, render_report};
use kf2_stats::ui::DashboardData;

#[derive(Parser, Debug)]
#[command(name = "kf2-stats-report")]
#[command(about = "Print Killing Floor 2 stats as text or JSON", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LogTarget::Stderr, cli.common.verbose)?;

    let config = cli.common.resolve_config()?;
    tracing::info!("Fetching {} stats", config.game.name());

    let snapshot = fetch_blocking(&config)?;
    let data = DashboardData::build(config.game, &snapshot, config.show_debug);

    if cli.json {
        println!("{}", render_json(&data)?);
    } else {
        print!("{}", render_report(&data));
    }
    Ok(())
}
