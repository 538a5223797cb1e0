use crate::themes::Theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use tourism_core::formatting::format_count;
use tourism_data::summary::RegionShare;

/// Configuration controlling visual appearance of a bar.
pub struct BarConfig {
    /// Width in terminal columns of the bar portion (excluding label).
    pub width: u16,
    /// Character used to fill the completed portion of the bar.
    pub filled_char: char,
    /// Character used to fill the empty portion of the bar.
    pub empty_char: char,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            width: 50,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
        }
    }
}

// ── VisitorBar ───────────────────────────────────────────────────────────────

/// One region's visitor count drawn relative to the month's largest region.
pub struct VisitorBar<'a> {
    pub visitors: u64,
    /// Largest visitor count in the month; the full-width reference.
    pub max: u64,
    pub style: Style,
    pub theme: &'a Theme,
    pub config: BarConfig,
}

impl<'a> VisitorBar<'a> {
    pub fn new(visitors: u64, max: u64, style: Style, theme: &'a Theme) -> Self {
        Self {
            visitors,
            max,
            style,
            theme,
            config: BarConfig::default(),
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.config.width = width;
        self
    }

    /// Number of filled columns, never more than the configured width.
    pub fn filled_columns(&self) -> u16 {
        if self.max == 0 {
            return 0;
        }
        let width = u128::from(self.config.width);
        let filled = (u128::from(self.visitors.min(self.max)) * width) / u128::from(self.max);
        filled as u16
    }

    pub fn to_line(&self) -> Line<'a> {
        let filled = self.filled_columns();
        let empty = self.config.width.saturating_sub(filled);

        let filled_str: String =
            std::iter::repeat_n(self.config.filled_char, filled as usize).collect();
        let empty_str: String =
            std::iter::repeat_n(self.config.empty_char, empty as usize).collect();

        Line::from(vec![
            Span::styled(filled_str, self.style),
            Span::styled(empty_str, self.theme.bar_empty),
            Span::styled(format!(" {}", format_count(self.visitors)), self.theme.bar_label),
        ])
    }
}

// ── ShareBar ─────────────────────────────────────────────────────────────────

/// Proportional multi-coloured bar of each region's share of the month.
///
/// Segments follow rank order; labels are only printed for shares that carry
/// one.
pub struct ShareBar<'a> {
    pub shares: &'a [RegionShare],
    pub theme: &'a Theme,
    pub width: u16,
}

impl<'a> ShareBar<'a> {
    pub fn new(shares: &'a [RegionShare], theme: &'a Theme) -> Self {
        Self {
            shares,
            theme,
            width: 50,
        }
    }

    pub fn to_line(&self) -> Line<'a> {
        let mut spans: Vec<Span<'a>> = Vec::new();

        for (rank, share) in self.shares.iter().enumerate() {
            let chars = (u64::from(share.percent) * u64::from(self.width) / 100) as usize;
            if chars > 0 {
                spans.push(Span::styled("█".repeat(chars), self.theme.rank_style(rank)));
            }
        }

        spans.push(Span::raw(" "));

        for (rank, share) in self.shares.iter().enumerate() {
            if let Some(label) = &share.label {
                spans.push(Span::styled(
                    format!("{}: {} ", share.region, label),
                    self.theme.rank_style(rank),
                ));
            }
        }

        Line::from(spans)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
