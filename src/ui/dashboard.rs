//! Full-screen terminal dashboard
//!
//! Overview strip across the top, one tab per report section below it.
//! Rendering is a pure function of `DashboardData` and `DashboardState`;
//! the event loop only redraws and feeds key presses to the state.

use std::io;
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Gauge, Paragraph, Row, Table, Tabs},
    Frame, Terminal,
};

use crate::core::error::Result;
use crate::stats::tables::{BEST_HEADSHOTS, MATCH_WINS, TOTAL_KILLS};
use crate::stats::{perks_by_level, Counter, LevelTier, Perk, MAX_PERK_LEVEL};
use crate::ui::format::{
    hours, percent, rate, thousands, KILL_RATE_DECIMALS, WIN_RATE_DECIMALS,
};
use crate::ui::state::{DashboardState, Tab};
use crate::ui::DashboardData;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

const HELP: &str = "Tab/Right next   Shift-Tab/Left prev   1-6 jump   Up/Down/PgUp/PgDn scroll   q quit";

/// Runs `restore` when dropped, including while unwinding from a panic
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leave raw mode and the alternate screen; errors are ignored since this
/// runs during teardown
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Run the dashboard until the user quits
pub fn run(data: &DashboardData) -> Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard {
        restore: restore_terminal,
    };
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut state = DashboardState::new(data.debug.is_some());
    event_loop(&mut terminal, data, &mut state)
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    data: &DashboardData,
    state: &mut DashboardState,
) -> Result<()> {
    while !state.should_quit {
        terminal.draw(|frame| draw(frame, data, state))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state.handle_key(key.code);
                }
            }
        }
    }
    tracing::debug!("Dashboard closed");
    Ok(())
}

/// Draw one frame
pub fn draw(frame: &mut Frame, data: &DashboardData, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, data, state, chunks[0]);
    render_overview(frame, data, chunks[1]);

    let body = chunks[2];
    match state.current() {
        Tab::Perks => render_perks(frame, data, body),
        Tab::Kills => render_kills(frame, data, body),
        Tab::PersonalBests => render_personal_bests(frame, data, body),
        Tab::Achievements => render_achievements(frame, data, state.scroll, body),
        Tab::Special => render_special(frame, data, body),
        Tab::Debug => render_debug(frame, data, state.scroll, body),
    }

    frame.render_widget(
        Paragraph::new(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
        chunks[3],
    );
}

pub fn tier_color(tier: LevelTier) -> Color {
    match tier {
        LevelTier::Max => Color::Blue,
        LevelTier::High => Color::Green,
        LevelTier::Mid => Color::Yellow,
        LevelTier::Low => Color::Red,
    }
}

/// Bar chart labels have room for a few characters only
fn short_name(perk: Perk) -> &'static str {
    match perk {
        Perk::Commando => "CMD",
        Perk::Berserker => "BSK",
        Perk::Support => "SUP",
        Perk::Firebug => "FIR",
        Perk::FieldMedic => "MED",
        Perk::Sharpshooter => "SHP",
        Perk::Demolitionist => "DEM",
        Perk::Survivalist => "SUR",
        Perk::Gunslinger => "GUN",
        Perk::Swat => "SWT",
    }
}

fn bordered(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title.into()))
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let para = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .block(bordered(title));
    frame.render_widget(para, area);
}

fn render_tabs(frame: &mut Frame, data: &DashboardData, state: &DashboardState, area: Rect) {
    let titles: Vec<Line> = state
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(bordered(format!("{} Stats", data.game_name)))
        .select(state.selected)
        .highlight_style(header_style());
    frame.render_widget(tabs, area);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, detail: String) {
    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).block(bordered(title)), area);
}

fn render_overview(frame: &mut Frame, data: &DashboardData, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    let summary = &data.perk_summary;
    let playtime = &data.playtime;
    let kills = data.report.kills.value(TOTAL_KILLS);
    let wins = data.report.special_counters.value(MATCH_WINS);

    let maxed_detail = if summary.perk_count > 0 {
        format!("{} done", percent(summary.maxed_percent()))
    } else {
        String::new()
    };

    render_card(
        frame,
        cells[0],
        "Max Perks",
        format!("{}/{}", summary.maxed_count, summary.perk_count),
        maxed_detail,
    );
    render_card(
        frame,
        cells[1],
        "Total Kills",
        thousands(kills),
        rate(playtime.per_hour(kills), KILL_RATE_DECIMALS, "kills/h"),
    );
    render_card(
        frame,
        cells[2],
        "Best Headshots",
        thousands(data.report.personal_bests.value(BEST_HEADSHOTS)),
        "single match".to_string(),
    );
    render_card(
        frame,
        cells[3],
        "Match Wins",
        thousands(wins),
        rate(playtime.per_hour(wins), WIN_RATE_DECIMALS, "wins/h"),
    );
    render_card(
        frame,
        cells[4],
        "Playtime",
        hours(playtime.minutes),
        format!("{} min", thousands(playtime.minutes)),
    );
}

fn render_perks(frame: &mut Frame, data: &DashboardData, area: Rect) {
    if data.report.perks.is_empty() {
        render_empty(frame, area, "Perks", "No perk data found.");
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let perks = perks_by_level(&data.report);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            perks
                .iter()
                .map(|_| Constraint::Length(3))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(cols[0]);

    for (perk, row) in perks.iter().zip(rows.iter()) {
        let mut title = format!("{}  Lv {}", perk.perk.name(), perk.level);
        if let Some(bonus) = perk.bonus {
            title.push_str(&format!("  {} {}", bonus.kind.label(), thousands(bonus.value)));
        }

        let label = if perk.is_max {
            format!("MAX   {} XP", thousands(perk.xp))
        } else {
            format!(
                "{}   {} XP to next",
                percent(perk.progress_percent),
                thousands(perk.xp_to_next)
            )
        };

        let gauge = Gauge::default()
            .block(bordered(title))
            .gauge_style(Style::default().fg(tier_color(LevelTier::of(perk.level))))
            .ratio((perk.progress_percent / 100.0).clamp(0.0, 1.0))
            .label(label);
        frame.render_widget(gauge, *row);
    }

    let bars: Vec<Bar> = data
        .report
        .perks
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.level as u64)
                .label(Line::from(short_name(p.perk)))
                .style(Style::default().fg(tier_color(LevelTier::of(p.level))))
        })
        .collect();
    let chart = BarChart::default()
        .block(bordered("Perk Levels"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .max(MAX_PERK_LEVEL as u64);
    frame.render_widget(chart, cols[1]);
}

fn render_kills(frame: &mut Frame, data: &DashboardData, area: Rect) {
    let kills = &data.report.kills;
    if !kills.has_any() {
        render_empty(frame, area, "Kills", "No kill data found.");
        return;
    }

    let total = kills.value(TOTAL_KILLS);
    let rows: Vec<Row> = kills
        .active()
        .map(|c| {
            let share = if total > 0 {
                percent(c.value as f64 / total as f64 * 100.0)
            } else {
                "-".to_string()
            };
            Row::new(vec![
                Cell::from(c.label),
                Cell::from(thousands(c.value)),
                Cell::from(share),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Length(14),
            Constraint::Length(10),
        ],
    )
    .header(Row::new(vec!["Kill Type", "Count", "Share"]).style(header_style()))
    .block(bordered("Kills"));
    frame.render_widget(table, area);
}

fn counter_table<'a>(title: &'a str, counters: &[Counter]) -> Table<'a> {
    let rows: Vec<Row> = counters
        .iter()
        .map(|c| Row::new(vec![Cell::from(c.label), Cell::from(thousands(c.value))]))
        .collect();

    Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
        .header(Row::new(vec!["Record", "Value"]).style(header_style()))
        .block(bordered(title))
}

fn render_personal_bests(frame: &mut Frame, data: &DashboardData, area: Rect) {
    let bests = data.report.personal_bests.sorted_desc();
    if bests.is_empty() {
        render_empty(frame, area, "Personal Bests", "No personal best data found.");
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    frame.render_widget(counter_table("Personal Bests", &bests), cols[0]);

    let bars: Vec<Bar> = bests
        .iter()
        .map(|c| {
            Bar::default()
                .value(c.value)
                .text_value(thousands(c.value))
                .label(Line::from(c.label))
        })
        .collect();
    let chart = BarChart::default()
        .block(bordered("Comparison"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Magenta));
    frame.render_widget(chart, cols[1]);
}

fn render_achievements(frame: &mut Frame, data: &DashboardData, scroll: u16, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let progress = &data.achievement_progress;
    let gauge = Gauge::default()
        .block(bordered("Achievement Progress"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(progress.ratio())
        .label(format!(
            "{} / {}   {}",
            progress.achieved,
            progress.total,
            percent(progress.percent)
        ));
    frame.render_widget(gauge, rows[0]);

    let counters: Vec<Counter> = data.report.achievement_counters.active().copied().collect();
    let list_area = if counters.is_empty() {
        rows[1]
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[1]);
        frame.render_widget(counter_table("From Stats", &counters), cols[1]);
        cols[0]
    };

    if data.achievements.is_empty() {
        render_empty(frame, list_area, "Unlocked", "No achievements unlocked.");
        return;
    }

    let lines: Vec<Line> = data
        .achievements
        .iter()
        .map(|a| {
            Line::from(vec![
                Span::styled(
                    a.display_name.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(a.description.clone(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    let para = Paragraph::new(lines)
        .block(bordered(format!("Unlocked ({})", data.achievements.len())))
        .scroll((scroll, 0));
    frame.render_widget(para, list_area);
}

fn render_special(frame: &mut Frame, data: &DashboardData, area: Rect) {
    let mut rows: Vec<Row> = data
        .report
        .special_counters
        .iter()
        .map(|c| Row::new(vec![Cell::from(c.label), Cell::from(thousands(c.value))]))
        .collect();

    let kills = data.report.kills.value(TOTAL_KILLS);
    let wins = data.report.special_counters.value(MATCH_WINS);
    rows.push(Row::new(vec![
        Cell::from("Kill rate"),
        Cell::from(rate(data.playtime.per_hour(kills), KILL_RATE_DECIMALS, "kills/h")),
    ]));
    rows.push(Row::new(vec![
        Cell::from("Win rate"),
        Cell::from(rate(data.playtime.per_hour(wins), WIN_RATE_DECIMALS, "wins/h")),
    ]));

    let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
        .header(Row::new(vec!["Counter", "Value"]).style(header_style()))
        .block(bordered("Special Stats"));
    frame.render_widget(table, area);
}

fn render_debug(frame: &mut Frame, data: &DashboardData, scroll: u16, area: Rect) {
    let Some(listing) = &data.debug else {
        render_empty(frame, area, "Debug", "Run with --debug to list raw stats.");
        return;
    };

    let lines: Vec<Line> = listing
        .entries
        .iter()
        .map(|e| {
            Line::from(format!(
                "{:<10} {:<32} {:>12}",
                e.key,
                e.display_name,
                thousands(e.value)
            ))
        })
        .collect();
    let title = format!(
        "Raw Stats  total {}  non-zero {}  zero {}",
        listing.total(),
        listing.non_zero,
        listing.zero()
    );
    frame.render_widget(
        Paragraph::new(lines).block(bordered(title)).scroll((scroll, 0)),
        area,
    );
}
