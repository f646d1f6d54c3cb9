//! UI state management for the terminal dashboard

use crossterm::event::KeyCode;

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: u16 = 10;

/// Dashboard tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Perks,
    Kills,
    PersonalBests,
    Achievements,
    Special,
    Debug,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Perks => "Perks",
            Tab::Kills => "Kills",
            Tab::PersonalBests => "Personal Bests",
            Tab::Achievements => "Achievements",
            Tab::Special => "Special",
            Tab::Debug => "Debug",
        }
    }
}

/// Dashboard UI state
#[derive(Debug)]
pub struct DashboardState {
    /// Tabs available this session (Debug only with --debug)
    pub tabs: Vec<Tab>,
    /// Index into `tabs`
    pub selected: usize,
    /// Vertical scroll of the active tab's list
    pub scroll: u16,
    pub should_quit: bool,
}

impl DashboardState {
    pub fn new(show_debug: bool) -> Self {
        let mut tabs = vec![
            Tab::Perks,
            Tab::Kills,
            Tab::PersonalBests,
            Tab::Achievements,
            Tab::Special,
        ];
        if show_debug {
            tabs.push(Tab::Debug);
        }
        Self {
            tabs,
            selected: 0,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn current(&self) -> Tab {
        self.tabs[self.selected]
    }

    /// Select a tab by index, ignoring out-of-range indices
    pub fn select(&mut self, index: usize) {
        if index < self.tabs.len() && index != self.selected {
            self.selected = index;
            self.scroll = 0;
        }
    }

    pub fn next_tab(&mut self) {
        self.select((self.selected + 1) % self.tabs.len());
    }

    pub fn prev_tab(&mut self) {
        self.select((self.selected + self.tabs.len() - 1) % self.tabs.len());
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Apply a key press
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.prev_tab(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(PAGE_ROWS),
            KeyCode::PageUp => self.scroll_up(PAGE_ROWS),
            KeyCode::Char(c @ '1'..='9') => self.select(c as usize - '1' as usize),
            _ => {}
        }
    }
}
