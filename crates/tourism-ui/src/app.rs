//! Application state and TUI event loop for the tourism dashboard.
//!
//! [`App`] owns the theme and the selected (year, month, region). Key handling
//! is a pure state transition in [`App::handle_key`]; [`App::run`] wraps it in
//! a blocking crossterm event loop that re-queries the [`DataContext`] when the
//! period changes and stops once a quit key or the shared stop flag is seen.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use tourism_core::constants::{BASE_YEAR, YEAR_RANGE};
use tourism_core::period::RefPeriod;
use tourism_data::context::DataContext;
use tourism_data::summary::MonthlySummary;

use crate::dashboard_view;
use crate::themes::Theme;

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the dashboard TUI.
pub struct App {
    pub theme: Theme,
    /// Two-digit year offset (2010 → 10).
    pub year_offset: u32,
    /// Month, 1–12.
    pub month: u32,
    /// Year offsets the selector may move between, ascending.
    pub years: Vec<u32>,
    /// Rank position of the highlighted region.
    pub selected: usize,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// `years` is normally [`DataContext::available_years`]; an empty list
    /// falls back to the default year range.
    pub fn new(theme_name: &str, year_offset: u32, month: u32, years: Vec<u32>) -> Self {
        let years = if years.is_empty() {
            YEAR_RANGE.map(|y| y - BASE_YEAR).collect()
        } else {
            years
        };
        Self {
            theme: Theme::from_name(theme_name),
            year_offset,
            month: month.clamp(1, 12),
            years,
            selected: 0,
            should_quit: false,
        }
    }

    /// The currently selected month.
    pub fn period(&self) -> RefPeriod {
        RefPeriod::from_offset(self.year_offset, self.month)
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    /// Apply one key press. `regions` is the size of the displayed slice and
    /// bounds the region selection.
    ///
    /// Returns `true` when the selected period changed.
    pub fn handle_key(&mut self, key: KeyEvent, regions: usize) -> bool {
        let before = (self.year_offset, self.month);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => self.month = if self.month <= 1 { 12 } else { self.month - 1 },
            KeyCode::Right => self.month = if self.month >= 12 { 1 } else { self.month + 1 },
            KeyCode::Up => {
                if let Some(&next) = self.years.iter().find(|&&y| y > self.year_offset) {
                    self.year_offset = next;
                }
            }
            KeyCode::Down => {
                if let Some(&prev) = self.years.iter().rev().find(|&&y| y < self.year_offset) {
                    self.year_offset = prev;
                }
            }
            KeyCode::Tab if regions > 0 => self.selected = (self.selected + 1) % regions,
            KeyCode::BackTab if regions > 0 => {
                self.selected = (self.selected + regions - 1) % regions;
            }
            _ => {}
        }

        let changed = before != (self.year_offset, self.month);
        if changed {
            self.selected = 0;
            tracing::debug!(year = self.year_offset, month = self.month, "period changed");
        }
        changed
    }

    /// `true` once a quit key was pressed or `stop` was raised from outside.
    pub fn should_exit(&self, stop: &AtomicBool) -> bool {
        self.should_quit || stop.load(Ordering::Relaxed)
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the interactive dashboard until the user quits or `stop` is set.
    ///
    /// Blocks the calling thread; `crossterm::event::poll` uses a 250 ms
    /// timeout so `stop` is observed within one tick. The terminal is
    /// restored whenever the loop exits, including on error.
    pub fn run(&mut self, ctx: &DataContext, stop: &AtomicBool) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);
        let mut summary = ctx.summary(self.year_offset, self.month);

        let result = loop {
            if let Err(e) = terminal.draw(|frame| self.render(frame, &summary)) {
                break Err(e);
            }

            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, summary.records.len()) {
                            summary = ctx.summary(self.year_offset, self.month);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => break Err(e),
                },
                Ok(false) => {}
                Err(e) => break Err(e),
            }

            if self.should_exit(stop) {
                break Ok(());
            }
        };

        // Restore terminal state even when the loop failed.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Render the current state into `frame`.
    pub fn render(&self, frame: &mut Frame, summary: &MonthlySummary) {
        let area = frame.area();
        if summary.is_empty() {
            dashboard_view::render_no_data(
                frame,
                area,
                &dashboard_view::period_label(summary),
                &self.theme,
            );
        } else {
            dashboard_view::render_dashboard(frame, area, summary, self.selected, &self.theme);
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
