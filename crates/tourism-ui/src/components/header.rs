use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative sparkle string placed either side of the application title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Selected period and region count in `[ Jul 2010 | 12 regions ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Selected month, e.g. `"Jul 2010"`.
    pub period: &'a str,
    /// Regions reporting for the selected month.
    pub regions: usize,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(period: &'a str, regions: usize, theme: &'a Theme) -> Self {
        Self {
            period,
            regions,
            theme,
        }
    }

    /// Render the header as exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);
        let noun = if self.regions == 1 { "region" } else { "regions" };

        vec![
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(" CANADIAN TOURISM DASHBOARD ", self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.period, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("{} {noun}", self.regions), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
